//! Simplification configuration.
//!
//! - One immutable value per run, passed by reference into the simplifier.
//! - JSON keys match the option names of the binding layer (`mindist`,
//!   `avoidself`, `geomrelate`, ...); missing keys take the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimplifyError};
use crate::offset::OffsetMetric;

/// Tolerances, relation toggles and the offset metric for one run.
///
/// Bands: `min_dist <= relax_dist <= threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum deviation a removable sub-chain may exhibit.
    pub threshold: f64,
    /// Deviation at or below which a chord collapses without relation checks.
    #[serde(rename = "mindist")]
    pub min_dist: f64,
    /// Middle band used by the distance relation.
    #[serde(rename = "relaxdist")]
    pub relax_dist: f64,
    /// Post-check: report any contact between non-adjacent output chords.
    #[serde(rename = "planarself")]
    pub planar_self: bool,
    /// Post-check: report proper crossings/overlaps between non-adjacent output chords.
    #[serde(rename = "nonplanarself")]
    pub non_planar_self: bool,
    /// Reject collapses that create a self-intersection absent from the input.
    #[serde(rename = "avoidself")]
    pub avoid_new_self_intersects: bool,
    #[serde(rename = "geomrelate")]
    pub geom_relation: bool,
    #[serde(rename = "distrelate")]
    pub dist_relation: bool,
    #[serde(rename = "dirrelate")]
    pub dir_relation: bool,
    #[serde(rename = "offset")]
    pub offset_metric: OffsetMetric,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            min_dist: 20.0,
            relax_dist: 30.0,
            planar_self: false,
            non_planar_self: false,
            avoid_new_self_intersects: true,
            geom_relation: true,
            dist_relation: false,
            dir_relation: false,
            offset_metric: OffsetMetric::Perpendicular,
        }
    }
}

impl Config {
    /// Plain Douglas–Peucker at `threshold`: no relation or self-intersection checks.
    pub fn plain(threshold: f64) -> Self {
        Self {
            threshold,
            min_dist: 0.0,
            relax_dist: 0.0,
            avoid_new_self_intersects: false,
            geom_relation: false,
            ..Self::default()
        }
    }

    /// True if any constraint-relation test is switched on.
    #[inline]
    pub fn any_relation(&self) -> bool {
        self.geom_relation || self.dist_relation || self.dir_relation
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("threshold", self.threshold),
            ("mindist", self.min_dist),
            ("relaxdist", self.relax_dist),
        ] {
            if !value.is_finite() {
                return Err(SimplifyError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(SimplifyError::InvalidParameter {
                    name,
                    value,
                    reason: "must be >= 0",
                });
            }
        }
        if self.min_dist > self.relax_dist {
            return Err(SimplifyError::InvalidParameter {
                name: "mindist",
                value: self.min_dist,
                reason: "mindist <= relaxdist required",
            });
        }
        if self.relax_dist > self.threshold {
            return Err(SimplifyError::InvalidParameter {
                name: "relaxdist",
                value: self.relax_dist,
                reason: "relaxdist <= threshold required",
            });
        }
        Ok(())
    }
}
