//! Self-intersection checks on the evolving and on the final simplified path.
//!
//! Contact rule (shared by every check here): two chords that share an endpoint
//! index only conflict if they overlap collinearly; any other contact conflicts.
//! Only a pair of unit chords (two input segments) may conflict in the output:
//! such a pair conflicted in the input already. A chord spanning removed
//! vertices must not conflict with any other output edge.

use serde::Serialize;

use crate::geom::cfg::EPS;
use crate::geom::{segment_intersection, Pt, SegIntersection, Segment};

/// Straight edge between two retained original indices (`from < to`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Chord {
    pub from: usize,
    pub to: usize,
}

impl Chord {
    #[inline]
    pub fn new(from: usize, to: usize) -> Self {
        debug_assert!(from < to, "chord must run forward: {from} -> {to}");
        Self { from, to }
    }

    /// True for an input segment `i -> i+1`.
    #[inline]
    pub fn is_unit(self) -> bool {
        self.to == self.from + 1
    }

    #[inline]
    fn segment(self, pts: &[Pt]) -> Segment {
        Segment::new(pts[self.from], pts[self.to])
    }

    #[inline]
    fn shares_endpoint(self, other: Chord) -> bool {
        self.from == other.from
            || self.from == other.to
            || self.to == other.from
            || self.to == other.to
    }

    /// True if the index ranges of `self` and `other` share more than an endpoint.
    #[inline]
    fn overlaps(self, other: Chord) -> bool {
        other.from < self.to && other.to > self.from
    }
}

/// Strictness of the post-condition scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfIntersectMode {
    /// Any contact between non-adjacent chords, vertex touches included.
    Planar,
    /// Proper crossings and collinear overlaps only.
    NonPlanar,
}

fn conflict(pts: &[Pt], c: Chord, d: Chord) -> bool {
    match segment_intersection(&c.segment(pts), &d.segment(pts)) {
        SegIntersection::Disjoint => false,
        SegIntersection::Overlap(..) => true,
        SegIntersection::Crossing(_) | SegIntersection::Touching(_) => !c.shares_endpoint(d),
    }
}

/// Consecutive edges of the retained index sequence.
pub fn chords_of(indices: &[usize]) -> Vec<Chord> {
    indices.windows(2).map(|w| Chord::new(w[0], w[1])).collect()
}

/// Input segments `0 -> 1, .., n-2 -> n-1`.
pub fn input_edges(n: usize) -> Vec<Chord> {
    (1..n).map(|i| Chord::new(i - 1, i)).collect()
}

/// Geometry of the path while the simplifier is running: accepted chords plus
/// the context edges no accepted chord has replaced yet.
///
/// The context is a sorted, gap-free edge sequence over the same points: the
/// input segments on the first round, the previous round's output afterwards.
pub(crate) struct PathState<'a> {
    pts: &'a [Pt],
    chords: Vec<Chord>,
    context: Vec<Chord>,
    live: Vec<bool>,
}

impl<'a> PathState<'a> {
    pub(crate) fn new(pts: &'a [Pt], context: Vec<Chord>) -> Self {
        let live = vec![true; context.len()];
        Self {
            pts,
            chords: Vec::new(),
            context,
            live,
        }
    }

    /// First edge of the current path that `cand` would intersect.
    pub(crate) fn introduces_new(&self, cand: Chord) -> Option<Chord> {
        for &d in &self.chords {
            debug_assert!(!cand.overlaps(d), "nested accepted chord");
            if conflict(self.pts, cand, d) {
                return Some(d);
            }
        }
        self.context
            .iter()
            .zip(&self.live)
            .filter(|(d, live)| **live && !cand.overlaps(**d))
            .map(|(d, _)| *d)
            .find(|d| conflict(self.pts, cand, *d))
    }

    /// Retire every context edge overlapping the range of `c`; `c` takes their place.
    pub(crate) fn accept(&mut self, c: Chord) {
        let lo = self.context.partition_point(|e| e.to <= c.from);
        let hi = self.context.partition_point(|e| e.from < c.to);
        if lo < hi {
            self.live[lo..hi].fill(false);
        }
        self.chords.push(c);
    }
}

/// Intersecting pairs of output chords under `mode`.
///
/// Consecutive chords are adjacent; so are the first and last chord when the
/// output is closed (first and last retained points coincide).
pub fn self_intersections(
    pts: &[Pt],
    indices: &[usize],
    mode: SelfIntersectMode,
) -> Vec<(Chord, Chord)> {
    let chords = chords_of(indices);
    let m = chords.len();
    let closed = match (indices.first(), indices.last()) {
        (Some(&a), Some(&b)) => m > 2 && (pts[a] - pts[b]).norm() <= EPS,
        _ => false,
    };
    let mut out = Vec::new();
    for a in 0..m {
        for b in (a + 1)..m {
            let adjacent = b == a + 1 || (closed && a == 0 && b == m - 1);
            let hit = match segment_intersection(&chords[a].segment(pts), &chords[b].segment(pts)) {
                SegIntersection::Disjoint => false,
                SegIntersection::Overlap(..) => true,
                SegIntersection::Crossing(_) => !adjacent,
                SegIntersection::Touching(_) => !adjacent && mode == SelfIntersectMode::Planar,
            };
            if hit {
                out.push((chords[a], chords[b]));
            }
        }
    }
    out
}

/// Pairs of output chords that conflict without both being input segments.
pub fn new_self_intersections(pts: &[Pt], indices: &[usize]) -> Vec<(Chord, Chord)> {
    let chords = chords_of(indices);
    let mut out = Vec::new();
    for (a, &c) in chords.iter().enumerate() {
        for &d in &chords[a + 1..] {
            if !(c.is_unit() && d.is_unit()) && conflict(pts, c, d) {
                out.push((c, d));
            }
        }
    }
    out
}
