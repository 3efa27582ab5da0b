//! Constrained Douglas–Peucker simplification.
//!
//! Purpose
//! - Reduce a polyline to a retained index subset while bounding deviation,
//!   preserving relations to constraint polygons, and (optionally) refusing
//!   collapses that create new self-intersections.
//!
//! Algorithm
//! - Explicit stack of `(i, j)` ranges, starting at `(0, n-1)`; `j - i <= 1` is terminal.
//! - Per range: worst interior vertex `k` under the offset metric, then
//!   - `dev > threshold` (or not finite): retain `k`, push `(i, k)` and `(k, j)`;
//!   - `dev <= min_dist`: collapse, unless self-intersection avoidance vetoes;
//!   - otherwise: collapse only if relation checks and self-intersection
//!     avoidance both pass; else retain `k` and split.
//! - With avoidance on, the pass repeats with the previous output as the path
//!   context until the output no longer changes.
//! - Optional post-checks (`planar_self`, `non_planar_self`) report residual
//!   self-intersections as warnings; there is no backtracking.
//!
//! Each call owns its state; constraints and config are shared read-only, so
//! independent calls run in parallel (`simplify_batch`).

mod engine;
mod types;

pub use types::{RetainedIndexSet, Simplification, Stats, Warning};

use std::sync::atomic::AtomicBool;

use rayon::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::geom::{Polygon, Polyline};
use engine::Runner;

/// Simplify `polyline` against `constraints`.
pub fn simplify(polyline: &Polyline, constraints: &[Polygon], cfg: &Config) -> Result<Simplification> {
    cfg.validate()?;
    Runner::new(polyline.points(), constraints, cfg).run(None)
}

/// Like `simplify`, polling `cancel` between range-stack pops.
pub fn simplify_with_cancel(
    polyline: &Polyline,
    constraints: &[Polygon],
    cfg: &Config,
    cancel: &AtomicBool,
) -> Result<Simplification> {
    cfg.validate()?;
    Runner::new(polyline.points(), constraints, cfg).run(Some(cancel))
}

/// Validate raw coordinates and simplify in one step.
pub fn simplify_coords(
    polyline: &[[f64; 2]],
    constraints: &[Vec<[f64; 2]>],
    cfg: &Config,
) -> Result<Simplification> {
    cfg.validate()?;
    let polyline = Polyline::from_coords(polyline)?;
    let constraints = Polygon::from_rings(constraints)?;
    simplify(&polyline, &constraints, cfg)
}

/// Simplify many polylines in parallel; results keep the input order.
pub fn simplify_batch(
    polylines: &[Polyline],
    constraints: &[Polygon],
    cfg: &Config,
) -> Vec<Result<Simplification>> {
    tracing::debug!(polylines = polylines.len(), constraints = constraints.len(), "batch");
    polylines
        .par_iter()
        .map(|pl| simplify(pl, constraints, cfg))
        .collect()
}

#[cfg(test)]
mod tests;
