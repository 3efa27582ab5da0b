//! Error type shared by input validation and the simplifier entry points.

use thiserror::Error;

/// Errors surfaced before (or instead of) a simplification result.
///
/// Numerical degeneracies never show up here; they are absorbed by the
/// geometry predicates. Residual self-intersections are warnings, not errors.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SimplifyError {
    #[error("polyline needs at least 2 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("non-finite coordinate in {what} at vertex {index}")]
    NonFinite { what: &'static str, index: usize },

    #[error("invalid constraint polygon: {reason}")]
    InvalidPolygon { reason: String },

    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("unknown offset metric {0:?}, expected dp | perpendicular | sed | squared-euclidean")]
    UnknownOffsetMetric(String),

    #[error("simplification cancelled with {pending} ranges pending")]
    Cancelled { pending: usize },
}

impl SimplifyError {
    pub(crate) fn polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }
}

/// Result alias for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, SimplifyError>;
