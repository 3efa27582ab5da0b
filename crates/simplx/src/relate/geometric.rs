//! Qualitative relation between a chain and a polygon.

use serde::Serialize;

use crate::geom::cfg::EPS;
use crate::geom::{locate_point, segment_intersection, Location, Polygon, Pt, SegIntersection, Segment};

/// Relation of a chain to a polygon area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// No common point.
    Disjoint,
    /// Meets the boundary only; never enters the interior.
    Touches,
    /// Has parts both inside and outside.
    Crosses,
    /// Entirely inside or on the boundary, with some part inside.
    Within,
}

/// Classify `chain` against `polygon`.
///
/// Each segment is cut at its boundary contacts; the midpoint of every piece
/// is located, so the classification is exact up to the predicate tolerance.
pub fn geometric_relation(chain: &[Pt], polygon: &Polygon) -> Relation {
    let mut inside = false;
    let mut outside = false;
    let mut touches = false;

    for p in chain {
        match locate_point(*p, polygon) {
            Location::Inside => inside = true,
            Location::Outside => outside = true,
            Location::Boundary => touches = true,
        }
    }

    let mut cuts: Vec<f64> = Vec::new();
    for w in chain.windows(2) {
        let seg = Segment::new(w[0], w[1]);
        if seg.is_degenerate() {
            continue;
        }
        cuts.clear();
        cuts.extend([0.0, 1.0]);
        for edge in polygon.edges() {
            match segment_intersection(&seg, &edge) {
                SegIntersection::Disjoint => {}
                SegIntersection::Crossing(p) | SegIntersection::Touching(p) => {
                    touches = true;
                    cuts.push(seg.param_of(p));
                }
                SegIntersection::Overlap(p, q) => {
                    touches = true;
                    cuts.push(seg.param_of(p));
                    cuts.push(seg.param_of(q));
                }
            }
        }
        cuts.sort_by(|a, b| a.total_cmp(b));
        let tol = EPS / seg.length();
        for pair in cuts.windows(2) {
            if pair[1] - pair[0] <= tol {
                continue;
            }
            match locate_point(seg.at(0.5 * (pair[0] + pair[1])), polygon) {
                Location::Inside => inside = true,
                Location::Outside => outside = true,
                Location::Boundary => touches = true,
            }
        }
        if inside && outside {
            return Relation::Crosses;
        }
    }

    match (inside, outside, touches) {
        (true, true, _) => Relation::Crosses,
        (true, false, _) => Relation::Within,
        (false, _, true) => Relation::Touches,
        (false, _, false) => Relation::Disjoint,
    }
}
