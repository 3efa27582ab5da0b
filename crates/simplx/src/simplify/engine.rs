//! Worklist engine: resolves `(i, j)` ranges until every chord is decided.
//!
//! With self-intersection avoidance the pass is repeated: each round checks
//! candidate chords against the previous round's output instead of the input
//! segments, until a round reproduces its own context. The first round alone
//! already guarantees that no new intersection is introduced; later rounds
//! drop vertices that were only kept because of input segments a collapse
//! removed afterwards.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::Config;
use crate::error::{Result, SimplifyError};
use crate::geom::{Polygon, Pt};
use crate::relate::RelationChecker;
use crate::self_intersect::{
    chords_of, input_edges, self_intersections, Chord, PathState, SelfIntersectMode,
};

use super::types::{RetainedIndexSet, Simplification, Stats, Warning};

/// Avoidance rounds before falling back to the first round's output.
const MAX_ROUNDS: usize = 16;

/// What happened to one range.
enum Decision {
    Collapse,
    Split(usize),
}

/// Runner carrying the per-call state shared by all rounds.
pub(crate) struct Runner<'a> {
    pts: &'a [Pt],
    cfg: &'a Config,
    relations: RelationChecker<'a>,
}

/// One pass over the range stack.
struct Pass<'r, 'a> {
    runner: &'r Runner<'a>,
    path: PathState<'a>,
    keep: Vec<bool>,
    stack: Vec<(usize, usize)>,
    stats: Stats,
}

impl<'a> Runner<'a> {
    pub(crate) fn new(pts: &'a [Pt], constraints: &'a [Polygon], cfg: &'a Config) -> Self {
        Self {
            pts,
            cfg,
            relations: RelationChecker::new(constraints, cfg),
        }
    }

    pub(crate) fn run(&self, cancel: Option<&AtomicBool>) -> Result<Simplification> {
        let mut context = input_edges(self.pts.len());
        let mut first: Option<(Vec<bool>, Stats)> = None;
        let mut rounds = 0;
        let (keep, stats) = loop {
            rounds += 1;
            let path = PathState::new(self.pts, context.clone());
            let (keep, mut stats) = Pass::new(self, path).run(cancel)?;
            stats.rounds = rounds;
            if !self.cfg.avoid_new_self_intersects {
                break (keep, stats);
            }
            let next = chords_of(RetainedIndexSet::from_mask(&keep).as_slice());
            if next == context {
                break (keep, stats);
            }
            let fallback = first.get_or_insert((keep, stats));
            if rounds == MAX_ROUNDS {
                tracing::warn!(rounds, "avoidance rounds did not settle; using the first round");
                break fallback.clone();
            }
            tracing::trace!(round = rounds, edges = next.len(), "avoidance round");
            context = next;
        };

        let indices = RetainedIndexSet::from_mask(&keep);
        let warnings = self.post_check(indices.as_slice());
        tracing::debug!(
            points = self.pts.len(),
            retained = indices.len(),
            rounds = stats.rounds,
            warnings = warnings.len(),
            "simplified"
        );
        Ok(Simplification {
            indices,
            warnings,
            stats,
        })
    }

    fn post_check(&self, indices: &[usize]) -> Vec<Warning> {
        let mut warnings = Vec::new();
        for (enabled, mode) in [
            (self.cfg.planar_self, SelfIntersectMode::Planar),
            (self.cfg.non_planar_self, SelfIntersectMode::NonPlanar),
        ] {
            if !enabled {
                continue;
            }
            let pairs = self_intersections(self.pts, indices, mode);
            if !pairs.is_empty() {
                tracing::warn!(mode = ?mode, pairs = pairs.len(), "residual self-intersection");
                warnings.push(Warning::ResidualSelfIntersection { mode, pairs });
            }
        }
        warnings
    }
}

impl<'r, 'a> Pass<'r, 'a> {
    fn new(runner: &'r Runner<'a>, path: PathState<'a>) -> Self {
        let n = runner.pts.len();
        let mut keep = vec![false; n];
        keep[0] = true;
        keep[n - 1] = true;
        Self {
            runner,
            path,
            keep,
            stack: vec![(0, n - 1)],
            stats: Stats::default(),
        }
    }

    fn run(mut self, cancel: Option<&AtomicBool>) -> Result<(Vec<bool>, Stats)> {
        while let Some((i, j)) = self.stack.pop() {
            if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
                return Err(SimplifyError::Cancelled {
                    pending: self.stack.len() + 1,
                });
            }
            if j - i <= 1 {
                continue;
            }
            self.stats.ranges += 1;
            match self.decide(i, j) {
                Decision::Collapse => {
                    tracing::trace!(i, j, "collapse");
                    self.path.accept(Chord::new(i, j));
                    self.stats.collapsed += 1;
                }
                Decision::Split(k) => {
                    self.keep[k] = true;
                    // Right half first so the left half pops next.
                    self.stack.push((k, j));
                    self.stack.push((i, k));
                }
            }
        }
        Ok((self.keep, self.stats))
    }

    fn decide(&mut self, i: usize, j: usize) -> Decision {
        let runner = self.runner;
        let Runner { pts, cfg, relations } = runner;
        // j - i >= 2, so the interior is non-empty.
        let Some((k, dev)) = cfg.offset_metric.max_offset(pts, i, j) else {
            return Decision::Collapse;
        };

        if dev > cfg.threshold {
            tracing::trace!(i, j, k, dev, "split:deviation");
            self.stats.split_deviation += 1;
            return Decision::Split(k);
        }

        if dev > cfg.min_dist {
            if let Some(v) = relations.check(&pts[i..=j]) {
                tracing::trace!(i, j, k, polygon = v.polygon, test = ?v.test, "split:relation");
                self.stats.split_relation += 1;
                return Decision::Split(k);
            }
        }

        if cfg.avoid_new_self_intersects {
            if let Some(hit) = self.path.introduces_new(Chord::new(i, j)) {
                tracing::trace!(i, j, k, hit = ?hit, "split:self");
                self.stats.split_self_intersection += 1;
                return Decision::Split(k);
            }
        }

        Decision::Collapse
    }
}
