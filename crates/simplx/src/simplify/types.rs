//! Output types of a simplification run.

use serde::Serialize;

use crate::geom::{Polyline, Pt};
use crate::self_intersect::{Chord, SelfIntersectMode};

/// Strictly increasing original indices; always holds the first and last index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RetainedIndexSet(Vec<usize>);

impl RetainedIndexSet {
    /// Collect the set bits of a keep-mask.
    pub(crate) fn from_mask(keep: &[bool]) -> Self {
        Self(
            keep.iter()
                .enumerate()
                .filter_map(|(i, &k)| k.then_some(i))
                .collect(),
        )
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, i: usize) -> bool {
        self.0.binary_search(&i).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

/// Non-fatal post-condition shortfalls.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// `planar_self` / `non_planar_self` was requested but the output still self-intersects.
    ResidualSelfIntersection {
        mode: SelfIntersectMode,
        pairs: Vec<(Chord, Chord)>,
    },
}

/// Counters of the decisions taken by the final pass of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Passes run; above 1 only with self-intersection avoidance.
    pub rounds: usize,
    pub ranges: usize,
    pub collapsed: usize,
    pub split_deviation: usize,
    pub split_relation: usize,
    pub split_self_intersection: usize,
}

/// Retained indices plus any warnings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Simplification {
    pub indices: RetainedIndexSet,
    pub warnings: Vec<Warning>,
    pub stats: Stats,
}

impl Simplification {
    /// Reduced coordinate sequence of `polyline`.
    pub fn coords(&self, polyline: &Polyline) -> Vec<Pt> {
        let pts = polyline.points();
        self.indices.iter().map(|i| pts[i]).collect()
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
