//! Constrained polyline simplification.
//!
//! Reduces the vertex count of a 2D polyline while bounding deviation from
//! the input, preserving its relation to a set of constraint polygons, and
//! optionally refusing to introduce self-intersections. The core is a pure
//! function of its inputs: points in, retained index set out.
//!
//! Layout
//! - `geom`: points, polylines, polygons, predicates.
//! - `offset`: deviation metrics (`dp`, `sed`).
//! - `config`: tolerances and toggles for one run.
//! - `relate`: geometric / distance / directional relation tests.
//! - `self_intersect`: checks on the evolving and final path.
//! - `simplify`: the worklist engine and entry points.

pub mod config;
pub mod error;
pub mod geom;
pub mod offset;
pub mod relate;
pub mod self_intersect;
pub mod simplify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::Config;
pub use error::{Result, SimplifyError};
pub use geom::{Polygon, Polyline, Pt};
pub use offset::OffsetMetric;
pub use simplify::{
    simplify, simplify_batch, simplify_coords, simplify_with_cancel, RetainedIndexSet,
    Simplification, Warning,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Result, SimplifyError};
    pub use crate::geom::{Polygon, Polyline, Pt};
    pub use crate::offset::OffsetMetric;
    pub use crate::relate::{geometric_relation, Relation, RelationTest};
    pub use crate::self_intersect::{
        new_self_intersections, self_intersections, Chord, SelfIntersectMode,
    };
    pub use crate::simplify::{
        simplify, simplify_batch, simplify_coords, simplify_with_cancel, RetainedIndexSet,
        Simplification, Stats, Warning,
    };
    pub use nalgebra::Vector2 as Vec2;
}
