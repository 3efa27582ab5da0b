use super::*;
use crate::error::SimplifyError;
use crate::offset::OffsetMetric;
use crate::self_intersect::{new_self_intersections, self_intersections, Chord, SelfIntersectMode};
use std::sync::atomic::AtomicBool;

fn line(coords: &[[f64; 2]]) -> Polyline {
    Polyline::from_coords(coords).unwrap()
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::from_coords(&[[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]).unwrap()
}

fn tight(avoid: bool) -> Config {
    Config {
        threshold: 1.0,
        min_dist: 0.0,
        relax_dist: 0.5,
        avoid_new_self_intersects: avoid,
        geom_relation: false,
        ..Config::default()
    }
}

// Vertical spur at x=2 ending just below a shallow bump at (2, 0.3).
fn spur() -> Polyline {
    line(&[[2.0, 0.15], [2.0, -3.0], [0.0, -3.0], [0.0, 0.0], [2.0, 0.3], [4.0, 0.0]])
}

#[test]
fn avoidance_keeps_vertex_that_would_cut_the_spur() {
    let pl = spur();
    let kept = simplify(&pl, &[], &tight(true)).unwrap();
    assert_eq!(kept.indices.as_slice(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(kept.stats.split_self_intersection, 1);
    assert_eq!(kept.stats.rounds, 1);

    let loose = simplify(&pl, &[], &tight(false)).unwrap();
    assert_eq!(loose.indices.as_slice(), &[0, 1, 2, 3, 5]);
    let fresh = new_self_intersections(pl.points(), loose.indices.as_slice());
    assert_eq!(fresh, vec![(Chord::new(0, 1), Chord::new(3, 5))]);
}

#[test]
fn residual_intersections_become_warnings() {
    let pl = spur();
    let cfg = Config {
        planar_self: true,
        non_planar_self: true,
        ..tight(false)
    };
    let out = simplify(&pl, &[], &cfg).unwrap();
    assert!(!out.is_clean());
    assert_eq!(out.warnings.len(), 2);
    match &out.warnings[1] {
        Warning::ResidualSelfIntersection { mode, pairs } => {
            assert_eq!(*mode, SelfIntersectMode::NonPlanar);
            assert_eq!(pairs, &vec![(Chord::new(0, 1), Chord::new(3, 5))]);
        }
    }
    // With avoidance on, the same post-checks pass.
    let cfg = Config {
        planar_self: true,
        non_planar_self: true,
        ..tight(true)
    };
    assert!(simplify(&pl, &[], &cfg).unwrap().is_clean());
}

fn hourglass() -> Polyline {
    line(&[
        [0.0, 0.0],
        [1.0, 1.05],
        [2.0, 2.2],
        [3.0, 3.05],
        [4.0, 4.0],
        [4.1, 2.0],
        [4.0, 0.0],
        [3.0, 0.95],
        [2.0, 1.8],
        [1.0, 2.95],
        [0.0, 4.0],
    ])
}

#[test]
fn hourglass_keeps_only_its_own_crossing() {
    let pl = hourglass();
    let out = simplify(&pl, &[], &tight(true)).unwrap();
    assert_eq!(out.indices.as_slice(), &[0, 1, 2, 4, 5, 6, 8, 9, 10]);
    let idx = out.indices.as_slice();
    assert!(new_self_intersections(pl.points(), idx).is_empty());
    // The surviving crossing is a pair of input segments.
    let residual = self_intersections(pl.points(), idx, SelfIntersectMode::NonPlanar);
    assert_eq!(residual, vec![(Chord::new(1, 2), Chord::new(8, 9))]);
}

#[test]
fn later_rounds_drop_vertices_kept_for_replaced_segments() {
    let pl = line(&[[0.0, 2.0], [1.0, -3.0], [-8.0, -9.0], [-2.0, 1.0], [-2.0, -4.0], [0.0, -1.0]]);
    let cfg = Config {
        avoid_new_self_intersects: true,
        ..Config::plain(5.0)
    };
    // Round one keeps 1: chord 0-2 crosses input segment 3-4, which chord 2-5
    // replaces later in the same round.
    let out = simplify(&pl, &[], &cfg).unwrap();
    assert_eq!(out.indices.as_slice(), &[0, 2, 5]);
    assert_eq!(out.stats.rounds, 3);
    assert!(new_self_intersections(pl.points(), out.indices.as_slice()).is_empty());

    let reduced = Polyline::new(out.coords(&pl)).unwrap();
    let again = simplify(&reduced, &[], &cfg).unwrap();
    assert_eq!(again.indices.as_slice(), &[0, 1, 2]);
}

#[test]
fn avoidance_second_pass_removes_nothing() {
    let cfg = tight(true);
    for pl in [spur(), hourglass()] {
        let once = simplify(&pl, &[], &cfg).unwrap();
        let reduced = Polyline::new(once.coords(&pl)).unwrap();
        let twice = simplify(&reduced, &[], &cfg).unwrap();
        assert_eq!(twice.indices.len(), reduced.len());
    }
    // A vertex that the input-segment exemption used to lose on a second pass.
    let pl = line(&[[49.6, 90.6], [0.0, -67.7], [-74.6, -94.3], [0.0, 51.5], [0.0, 0.0], [0.0, -85.5]]);
    let cfg = Config {
        avoid_new_self_intersects: true,
        ..Config::plain(52.8)
    };
    let once = simplify(&pl, &[], &cfg).unwrap();
    let reduced = Polyline::new(once.coords(&pl)).unwrap();
    let twice = simplify(&reduced, &[], &cfg).unwrap();
    assert_eq!(twice.indices.len(), reduced.len());
}

#[test]
fn unchecked_collapse_below_min_dist_can_hide_a_crossing() {
    // The wiggle through the square deviates 0.5 <= min_dist, so it collapses
    // unchecked; a second pass no longer sees the crossing that kept vertex 3.
    let pl = line(&[[0.0, 0.0], [5.0, 0.5], [10.0, 0.0], [13.0, 4.0], [16.0, 0.0]]);
    let constraints = [square(4.8, 0.2, 5.2, 0.8)];
    let cfg = Config {
        threshold: 10.0,
        min_dist: 1.0,
        relax_dist: 1.0,
        avoid_new_self_intersects: false,
        ..Config::default()
    };
    let once = simplify(&pl, &constraints, &cfg).unwrap();
    assert_eq!(once.indices.as_slice(), &[0, 2, 3, 4]);
    assert_eq!(once.stats.split_relation, 2);

    let reduced = Polyline::new(once.coords(&pl)).unwrap();
    let twice = simplify(&reduced, &constraints, &cfg).unwrap();
    assert_eq!(twice.indices.as_slice(), &[0, 3]);
}

#[test]
fn overflowing_deviation_keeps_the_vertex() {
    let pl = line(&[[-1e308, 0.0], [0.0, 1e308], [1e308, 0.0]]);
    let out = simplify(&pl, &[], &Config::plain(1.0)).unwrap();
    assert_eq!(out.indices.as_slice(), &[0, 1, 2]);
    assert_eq!(out.stats.split_deviation, 1);
}

#[test]
fn directional_relation_is_independent_of_geometric() {
    // Detour over an obstacle that neither the detour nor its chord touch.
    let pl = line(&[[0.0, 0.0], [4.5, 6.0], [10.0, 0.0]]);
    let constraints = [square(4.0, 1.0, 5.0, 2.0)];
    let base = Config {
        threshold: 10.0,
        min_dist: 0.0,
        relax_dist: 1.0,
        ..Config::default()
    };
    let geom_only = simplify(&pl, &constraints, &base).unwrap();
    assert_eq!(geom_only.indices.as_slice(), &[0, 2]);

    let dir = Config {
        dir_relation: true,
        ..base
    };
    let out = simplify(&pl, &constraints, &dir).unwrap();
    assert_eq!(out.indices.as_slice(), &[0, 1, 2]);
    assert_eq!(out.stats.split_relation, 1);

    // Deviation at or below min_dist skips relation checks altogether.
    let lenient = Config {
        min_dist: 6.0,
        relax_dist: 6.0,
        ..dir
    };
    assert_eq!(
        simplify(&pl, &constraints, &lenient).unwrap().indices.as_slice(),
        &[0, 2]
    );
}

#[test]
fn squared_euclidean_metric_sees_along_track_gaps() {
    let pl = line(&[[0.0, 0.0], [1.0, 0.0], [5.0, 0.0], [10.0, 0.0]]);
    let dp = simplify(&pl, &[], &Config::plain(10.0)).unwrap();
    assert_eq!(dp.indices.as_slice(), &[0, 3]);
    let sed = Config {
        offset_metric: OffsetMetric::SquaredEuclidean,
        ..Config::plain(10.0)
    };
    assert_eq!(simplify(&pl, &[], &sed).unwrap().indices.as_slice(), &[0, 2, 3]);
}

#[test]
fn two_point_input_is_returned_as_is() {
    let pl = line(&[[0.0, 0.0], [3.0, 1.0]]);
    let out = simplify(&pl, &[], &Config::default()).unwrap();
    assert_eq!(out.indices.as_slice(), &[0, 1]);
    assert_eq!(out.stats.ranges, 0);
    assert_eq!(out.stats.rounds, 1);
    assert_eq!(out.coords(&pl), pl.points().to_vec());
}

#[test]
fn invalid_config_is_rejected_before_work() {
    let pl = spur();
    let cfg = Config {
        min_dist: 2.0,
        relax_dist: 1.0,
        ..tight(true)
    };
    assert!(matches!(
        simplify(&pl, &[], &cfg),
        Err(SimplifyError::InvalidParameter { .. })
    ));
    assert!(matches!(
        simplify_coords(&[[0.0, 0.0]], &[], &Config::default()),
        Err(SimplifyError::TooFewPoints { got: 1 })
    ));
}

#[test]
fn cancellation_between_pops() {
    let pl = spur();
    let cancel = AtomicBool::new(true);
    assert_eq!(
        simplify_with_cancel(&pl, &[], &tight(true), &cancel),
        Err(SimplifyError::Cancelled { pending: 1 })
    );
    let go = AtomicBool::new(false);
    let out = simplify_with_cancel(&pl, &[], &tight(true), &go).unwrap();
    assert_eq!(out, simplify(&pl, &[], &tight(true)).unwrap());
}

#[test]
fn batch_matches_sequential_runs() {
    let lines = vec![
        spur(),
        line(&[[0.0, 0.0], [1.0, 0.1], [2.0, 0.0], [3.0, 4.0], [4.0, 0.0]]),
        line(&[[0.0, 0.0], [5.0, 5.0]]),
    ];
    let constraints = [square(10.0, 10.0, 12.0, 12.0)];
    let cfg = tight(true);
    let batch = simplify_batch(&lines, &constraints, &cfg);
    assert_eq!(batch.len(), lines.len());
    for (pl, got) in lines.iter().zip(batch) {
        assert_eq!(got.unwrap(), simplify(pl, &constraints, &cfg).unwrap());
    }
}
