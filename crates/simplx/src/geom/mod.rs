//! 2D geometry primitives for constrained simplification.
//!
//! Purpose
//! - Validated input types (`Polyline`, `Polygon`) over `nalgebra` points.
//! - Total, eps-aware predicates: point/line and point/segment distance,
//!   segment intersection classification, point location, polygon distance.
//!
//! Numerics
//! - One absolute tolerance (`cfg::EPS`) decides coincidence. Callers should
//!   keep coordinates at moderate scale (projected units, not raw degrees * 1e9).

pub(crate) mod cfg;
pub mod predicates;
mod types;

pub use predicates::{
    chain_polygon_distance, locate_point, orient, perp, point_line_distance,
    point_polygon_distance, point_segment_distance, segment_distance, segment_intersection,
    segments_intersect, squared_distance, winding_number, Location, SegIntersection,
};
pub use types::{Polygon, Polyline, Pt, Segment};
