//! Distance and intersection predicates over segments, chains and rings.
//!
//! All functions are total. Degenerate (zero-length) segments behave like the
//! point they collapse to; nothing divides by a zero length.

use super::cfg::EPS;
use super::types::{Polygon, Pt, Segment};

/// 2D cross product (z-component of `a × b`).
#[inline]
pub fn perp(a: Pt, b: Pt) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Orientation of `p` relative to the directed line `a -> b`; > 0 is left.
#[inline]
pub fn orient(a: Pt, b: Pt, p: Pt) -> f64 {
    perp(b - a, p - a)
}

#[inline]
pub fn squared_distance(a: Pt, b: Pt) -> f64 {
    (a - b).norm_squared()
}

/// Distance from `p` to the infinite line through `a` and `b`.
/// Coincident anchors fall back to the distance to `a`.
pub fn point_line_distance(p: Pt, a: Pt, b: Pt) -> f64 {
    let d = b - a;
    let len = d.norm();
    if len <= EPS {
        return (p - a).norm();
    }
    perp(d, p - a).abs() / len
}

/// Distance from `p` to the closed segment `s`.
pub fn point_segment_distance(p: Pt, s: &Segment) -> f64 {
    (p - s.at(s.param_of(p))).norm()
}

/// How two closed segments meet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegIntersection {
    Disjoint,
    /// Interiors cross in a single point.
    Crossing(Pt),
    /// Single contact point that is an endpoint of at least one segment.
    Touching(Pt),
    /// Collinear with a shared stretch of positive length.
    Overlap(Pt, Pt),
}

impl SegIntersection {
    #[inline]
    pub fn is_disjoint(&self) -> bool {
        matches!(self, SegIntersection::Disjoint)
    }
}

/// Classify the intersection of `s` and `t`.
pub fn segment_intersection(s: &Segment, t: &Segment) -> SegIntersection {
    let r = s.dir();
    let q = t.dir();
    let (ls, lt) = (r.norm(), q.norm());
    match (ls <= EPS, lt <= EPS) {
        (true, true) => {
            return if (s.a - t.a).norm() <= EPS {
                SegIntersection::Touching(s.a)
            } else {
                SegIntersection::Disjoint
            };
        }
        (true, false) => {
            return if point_segment_distance(s.a, t) <= EPS {
                SegIntersection::Touching(s.a)
            } else {
                SegIntersection::Disjoint
            };
        }
        (false, true) => {
            return if point_segment_distance(t.a, s) <= EPS {
                SegIntersection::Touching(t.a)
            } else {
                SegIntersection::Disjoint
            };
        }
        (false, false) => {}
    }

    let w = t.a - s.a;
    let denom = perp(r, q);
    let tol_s = EPS / ls;
    let tol_t = EPS / lt;

    if denom.abs() <= EPS * ls * lt {
        // Parallel: disjoint unless `t` lies on the line of `s`.
        if perp(r, w).abs() / ls > EPS {
            return SegIntersection::Disjoint;
        }
        let rr = ls * ls;
        let t0 = w.dot(&r) / rr;
        let t1 = (t.b - s.a).dot(&r) / rr;
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        if lo > hi + tol_s {
            SegIntersection::Disjoint
        } else if hi - lo <= tol_s {
            SegIntersection::Touching(s.at(0.5 * (lo + hi)))
        } else {
            SegIntersection::Overlap(s.at(lo), s.at(hi))
        }
    } else {
        let u = perp(w, q) / denom;
        let v = perp(w, r) / denom;
        if u < -tol_s || u > 1.0 + tol_s || v < -tol_t || v > 1.0 + tol_t {
            return SegIntersection::Disjoint;
        }
        let p = s.at(u.clamp(0.0, 1.0));
        let at_end = u <= tol_s || u >= 1.0 - tol_s || v <= tol_t || v >= 1.0 - tol_t;
        if at_end {
            SegIntersection::Touching(p)
        } else {
            SegIntersection::Crossing(p)
        }
    }
}

#[inline]
pub fn segments_intersect(s: &Segment, t: &Segment) -> bool {
    !segment_intersection(s, t).is_disjoint()
}

/// Minimum distance between two closed segments (0 if they meet).
pub fn segment_distance(s: &Segment, t: &Segment) -> f64 {
    if segments_intersect(s, t) {
        return 0.0;
    }
    point_segment_distance(s.a, t)
        .min(point_segment_distance(s.b, t))
        .min(point_segment_distance(t.a, s))
        .min(point_segment_distance(t.b, s))
}

/// Winding number of the closed `ring` (first == last) around `p`.
pub fn winding_number(p: Pt, ring: &[Pt]) -> i32 {
    let mut wn = 0;
    for w in ring.windows(2) {
        let (a, b) = (w[0], w[1]);
        if a.y <= p.y {
            if b.y > p.y && orient(a, b, p) > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && orient(a, b, p) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// Position of a point relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

pub fn locate_point(p: Pt, polygon: &Polygon) -> Location {
    if polygon
        .edges()
        .any(|e| point_segment_distance(p, &e) <= EPS)
    {
        Location::Boundary
    } else if winding_number(p, polygon.ring()) != 0 {
        Location::Inside
    } else {
        Location::Outside
    }
}

/// Distance from `p` to the polygon area (0 inside or on the boundary).
pub fn point_polygon_distance(p: Pt, polygon: &Polygon) -> f64 {
    if locate_point(p, polygon) != Location::Outside {
        return 0.0;
    }
    polygon
        .edges()
        .map(|e| point_segment_distance(p, &e))
        .fold(f64::INFINITY, f64::min)
}

/// Distance from the chain `pts` to the polygon area.
/// A single-point chain is treated as that point.
pub fn chain_polygon_distance(pts: &[Pt], polygon: &Polygon) -> f64 {
    if pts.iter().any(|p| locate_point(*p, polygon) != Location::Outside) {
        return 0.0;
    }
    if pts.len() == 1 {
        return point_polygon_distance(pts[0], polygon);
    }
    let mut best = f64::INFINITY;
    for w in pts.windows(2) {
        let s = Segment::new(w[0], w[1]);
        for e in polygon.edges() {
            best = best.min(segment_distance(&s, &e));
            if best == 0.0 {
                return 0.0;
            }
        }
    }
    best
}
