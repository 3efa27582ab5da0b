//! Concrete end-to-end scenarios.

use simplx::prelude::*;

fn line(coords: &[[f64; 2]]) -> Polyline {
    Polyline::from_coords(coords).unwrap()
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::from_coords(&[[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]).unwrap()
}

fn bands(threshold: f64, min_dist: f64, relax_dist: f64) -> Config {
    Config {
        threshold,
        min_dist,
        relax_dist,
        ..Config::default()
    }
}

#[test]
fn collinear_input_collapses_to_endpoints() {
    let pl = line(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0], [4.0, 0.0]]);
    let out = simplify(&pl, &[], &bands(0.01, 0.0, 0.0)).unwrap();
    assert_eq!(out.indices.as_slice(), &[0, 4]);
    assert!(out.is_clean());
}

#[test]
fn staircase_peak_is_retained() {
    let pl = line(&[[0.0, 0.0], [1.0, 0.0], [2.0, 10.0], [3.0, 0.0], [4.0, 0.0]]);
    let out = simplify(&pl, &[], &bands(1.0, 0.0, 0.5)).unwrap();
    assert!(out.indices.contains(2));
    assert_eq!(out.indices.as_slice(), &[0, 2, 4]);
    let coords = out.coords(&pl);
    assert_eq!(coords[1], Vec2::new(2.0, 10.0));
}

#[test]
fn crossing_of_constraint_is_preserved() {
    let pl = line(&[[0.0, 0.0], [5.0, 3.0], [10.0, 0.0]]);
    let constraints = [square(4.0, 2.0, 6.0, 4.0)];
    let cfg = bands(10.0, 0.0, 1.0);
    let out = simplify(&pl, &constraints, &cfg).unwrap();
    assert_eq!(out.indices.as_slice(), &[0, 1, 2]);
    assert_eq!(
        geometric_relation(&out.coords(&pl), &constraints[0]),
        Relation::Crosses
    );

    // Without the geometric relation the same chord collapses.
    let unconstrained = Config {
        geom_relation: false,
        ..cfg
    };
    let out = simplify(&pl, &constraints, &unconstrained).unwrap();
    assert_eq!(out.indices.as_slice(), &[0, 2]);
}

#[test]
fn zero_tolerances_leave_input_unchanged() {
    let lines = vec![
        line(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [3.0, 1.0], [4.0, 0.0]]),
        line(&[[0.0, 0.0], [2.0, 1.0], [3.0, -1.0], [5.0, 2.0]]),
    ];
    let cfg = bands(0.0, 0.0, 0.0);
    for (pl, out) in lines.iter().zip(simplify_batch(&lines, &[], &cfg)) {
        let out = out.unwrap();
        assert_eq!(out.indices.len(), pl.len());
        assert_eq!(out.coords(pl), pl.points().to_vec());
    }
}

#[test]
fn hourglass_gains_no_new_crossing() {
    let pl = line(&[
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
    ]);
    let cfg = Config {
        avoid_new_self_intersects: true,
        non_planar_self: true,
        ..bands(1.0, 0.0, 0.5)
    };
    let out = simplify(&pl, &[], &cfg).unwrap();
    let idx = out.indices.as_slice();
    assert!(idx.len() < pl.len());
    assert!(new_self_intersections(pl.points(), idx).is_empty());
    // The hourglass crossing itself is still there and reported.
    let residual = self_intersections(pl.points(), idx, SelfIntersectMode::NonPlanar);
    assert_eq!(residual.len(), 1);
    assert_eq!(out.warnings.len(), 1);
}

#[test]
fn raw_coordinate_entry_point_validates_constraints() {
    let ring = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];
    let err = simplify_coords(&[[0.0, 0.0], [1.0, 1.0]], &[ring], &Config::default()).unwrap_err();
    assert!(matches!(err, SimplifyError::InvalidPolygon { .. }));
}
