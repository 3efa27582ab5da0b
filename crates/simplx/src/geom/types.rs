//! Input geometry: points, segments, polylines and constraint polygons.
//!
//! - `Pt`: a plain `nalgebra::Vector2<f64>` (value type, no identity).
//! - `Polyline`: validated open chain (>= 2 finite points).
//! - `Polygon`: validated closed simple ring used as a read-only obstacle.
//!
//! Construction validates; everything downstream assumes valid input.

use nalgebra::Vector2;

use super::cfg::EPS;
use super::predicates::{segment_intersection, SegIntersection};
use crate::error::{Result, SimplifyError};

/// 2D point.
pub type Pt = Vector2<f64>;

/// Closed segment `[a, b]`. May be degenerate (`a == b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Pt,
    pub b: Pt,
}

impl Segment {
    #[inline]
    pub fn new(a: Pt, b: Pt) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn dir(&self) -> Pt {
        self.b - self.a
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.dir().norm()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() <= EPS
    }

    /// Point at parameter `t` (0 at `a`, 1 at `b`).
    #[inline]
    pub fn at(&self, t: f64) -> Pt {
        self.a + self.dir() * t
    }

    /// Parameter of the orthogonal projection of `p`, clamped to [0, 1].
    /// Degenerate segments project everything to 0.
    pub fn param_of(&self, p: Pt) -> f64 {
        let d = self.dir();
        let dd = d.norm_squared();
        if dd <= EPS * EPS {
            return 0.0;
        }
        ((p - self.a).dot(&d) / dd).clamp(0.0, 1.0)
    }
}

fn check_finite(pts: &[Pt], what: &'static str) -> Result<()> {
    match pts.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        Some(index) => Err(SimplifyError::NonFinite { what, index }),
        None => Ok(()),
    }
}

/// Ordered open chain of points. Indices are the positions of the input.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pts: Vec<Pt>,
}

impl Polyline {
    pub fn new(pts: Vec<Pt>) -> Result<Self> {
        if pts.len() < 2 {
            return Err(SimplifyError::TooFewPoints { got: pts.len() });
        }
        check_finite(&pts, "polyline")?;
        Ok(Self { pts })
    }

    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self> {
        Self::new(coords.iter().map(|c| Pt::new(c[0], c[1])).collect())
    }

    #[inline]
    pub fn points(&self) -> &[Pt] {
        &self.pts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    /// Always false for a constructed polyline; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Segment `i -> i+1`.
    #[inline]
    pub fn segment(&self, i: usize) -> Segment {
        Segment::new(self.pts[i], self.pts[i + 1])
    }
}

/// Closed simple ring (first == last), at least 3 distinct vertices, non-zero area.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    ring: Vec<Pt>,
}

impl Polygon {
    /// Validate and build. Consecutive duplicate vertices are dropped.
    pub fn new(ring: Vec<Pt>) -> Result<Self> {
        check_finite(&ring, "polygon")?;
        let (Some(first), Some(last)) = (ring.first(), ring.last()) else {
            return Err(SimplifyError::polygon("empty ring"));
        };
        if (first - last).norm() > EPS {
            return Err(SimplifyError::polygon("ring is not closed (first != last)"));
        }
        let mut clean: Vec<Pt> = Vec::with_capacity(ring.len());
        for p in ring {
            if clean.last().is_none_or(|q: &Pt| (p - q).norm() > EPS) {
                clean.push(p);
            }
        }
        // Re-close exactly after dedup (last may have been folded into the first).
        if clean.len() > 1 && (clean[0] - clean[clean.len() - 1]).norm() <= EPS {
            clean.pop();
        }
        if clean.len() < 3 {
            return Err(SimplifyError::polygon("needs at least 3 distinct vertices"));
        }
        clean.push(clean[0]);
        let poly = Self { ring: clean };
        if poly.signed_area().abs() <= EPS {
            return Err(SimplifyError::polygon("ring has zero area"));
        }
        if let Some((e, f)) = poly.first_self_intersection() {
            return Err(SimplifyError::polygon(format!(
                "ring self-intersects at edges {e} and {f}"
            )));
        }
        Ok(poly)
    }

    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self> {
        Self::new(coords.iter().map(|c| Pt::new(c[0], c[1])).collect())
    }

    /// Build a constraint set; errors name the offending ring.
    pub fn from_rings(rings: &[Vec<[f64; 2]>]) -> Result<Vec<Self>> {
        rings
            .iter()
            .enumerate()
            .map(|(i, r)| {
                Self::from_coords(r).map_err(|e| match e {
                    SimplifyError::InvalidPolygon { reason } => {
                        SimplifyError::polygon(format!("constraint {i}: {reason}"))
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Closed ring, first == last.
    #[inline]
    pub fn ring(&self) -> &[Pt] {
        &self.ring
    }

    /// Distinct vertices (ring without the closing duplicate).
    #[inline]
    pub fn vertices(&self) -> &[Pt] {
        &self.ring[..self.ring.len() - 1]
    }

    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.ring.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Shoelace area, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .ring
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f64>()
    }

    fn first_self_intersection(&self) -> Option<(usize, usize)> {
        let edges: Vec<Segment> = self.edges().collect();
        let m = edges.len();
        for e in 0..m {
            for f in (e + 1)..m {
                let adjacent = f == e + 1 || (e == 0 && f == m - 1);
                match segment_intersection(&edges[e], &edges[f]) {
                    SegIntersection::Disjoint => {}
                    SegIntersection::Overlap(..) => return Some((e, f)),
                    _ if !adjacent => return Some((e, f)),
                    _ => {}
                }
            }
        }
        None
    }
}
