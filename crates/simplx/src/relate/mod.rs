//! Constraint relation checks for candidate collapses.
//!
//! A collapse replaces the sub-chain `p_i ..= p_j` by the chord `p_i -> p_j`.
//! It is relation-safe if, for every constraint polygon, each enabled test
//! gives the same answer for the chord as for the sub-chain:
//! - geometric: qualitative relation (disjoint / touches / crosses / within),
//! - distance: distance band w.r.t. `min_dist`, `relax_dist`, `threshold`,
//! - directional: no polygon inside the region swept by the collapse.

mod direction;
mod distance;
mod geometric;

pub use direction::swept_region_contains;
pub use distance::{distance_band, distance_safe};
pub use geometric::{geometric_relation, Relation};

use serde::Serialize;

use crate::config::Config;
use crate::geom::{Polygon, Pt};

/// Which relation test rejected a collapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationTest {
    Geometric,
    Distance,
    Directional,
}

/// First failing test and the constraint it failed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    pub polygon: usize,
    pub test: RelationTest,
}

/// Evaluates the enabled relation tests against a shared constraint set.
pub struct RelationChecker<'a> {
    constraints: &'a [Polygon],
    cfg: &'a Config,
}

impl<'a> RelationChecker<'a> {
    pub fn new(constraints: &'a [Polygon], cfg: &'a Config) -> Self {
        Self { constraints, cfg }
    }

    /// False when the result of `check` is vacuously `None`.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.constraints.is_empty() && self.cfg.any_relation()
    }

    /// First violation of collapsing `chain` (anchors included) to its end chord.
    pub fn check(&self, chain: &[Pt]) -> Option<Violation> {
        if !self.is_active() || chain.len() < 3 {
            return None;
        }
        let chord = [chain[0], chain[chain.len() - 1]];
        for (polygon, constraint) in self.constraints.iter().enumerate() {
            if self.cfg.geom_relation
                && geometric_relation(chain, constraint) != geometric_relation(&chord, constraint)
            {
                return Some(Violation {
                    polygon,
                    test: RelationTest::Geometric,
                });
            }
            if self.cfg.dist_relation && !distance_safe(chain, &chord, constraint, self.cfg) {
                return Some(Violation {
                    polygon,
                    test: RelationTest::Distance,
                });
            }
            if self.cfg.dir_relation && swept_region_contains(chain, constraint) {
                return Some(Violation {
                    polygon,
                    test: RelationTest::Directional,
                });
            }
        }
        None
    }
}
