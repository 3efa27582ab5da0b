//! Tolerance defaults for the 2D predicates (internal).
//!
//! Policy
//! - Fixed constants, same as the rest of the crate: callers tune the
//!   simplification through `Config`, never through predicate tolerances.

/// Absolute distance below which two points, or a point and a segment, coincide.
pub(crate) const EPS: f64 = 1e-9;
