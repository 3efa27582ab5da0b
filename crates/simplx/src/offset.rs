//! Offset metrics: pick the worst interior vertex of a chord.
//!
//! - `Perpendicular` ("dp"): distance to the line through the anchors.
//! - `SquaredEuclidean` ("sed"): squared distance to the nearer anchor.
//!   Magnitudes are squared, so thresholds compared against it are too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimplifyError;
use crate::geom::{point_line_distance, squared_distance, Pt};

/// Deviation function used by the simplifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OffsetMetric {
    #[default]
    Perpendicular,
    SquaredEuclidean,
}

impl OffsetMetric {
    /// Deviation of `p` from the chord `a -> b`.
    #[inline]
    pub fn deviation(self, p: Pt, a: Pt, b: Pt) -> f64 {
        match self {
            OffsetMetric::Perpendicular => point_line_distance(p, a, b),
            OffsetMetric::SquaredEuclidean => squared_distance(p, a).min(squared_distance(p, b)),
        }
    }

    /// Index and magnitude of the maximum-deviation vertex strictly between `i` and `j`.
    ///
    /// Ties resolve to the lowest index; a NaN deviation counts as infinite.
    /// `None` if the range has no interior.
    pub fn max_offset(self, pts: &[Pt], i: usize, j: usize) -> Option<(usize, f64)> {
        let (a, b) = (pts[i], pts[j]);
        let mut best: Option<(usize, f64)> = None;
        for (k, p) in pts.iter().enumerate().take(j).skip(i + 1) {
            let dev = self.deviation(*p, a, b);
            // Overflowing coordinates yield NaN; rank them above any threshold.
            let dev = if dev.is_nan() { f64::INFINITY } else { dev };
            if best.is_none_or(|(_, d)| dev > d) {
                best = Some((k, dev));
            }
        }
        best
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OffsetMetric::Perpendicular => "dp",
            OffsetMetric::SquaredEuclidean => "sed",
        }
    }
}

impl FromStr for OffsetMetric {
    type Err = SimplifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dp" | "perpendicular" => Ok(OffsetMetric::Perpendicular),
            "sed" | "squared-euclidean" => Ok(OffsetMetric::SquaredEuclidean),
            _ => Err(SimplifyError::UnknownOffsetMetric(s.to_string())),
        }
    }
}

impl TryFrom<String> for OffsetMetric {
    type Error = SimplifyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OffsetMetric> for String {
    fn from(m: OffsetMetric) -> Self {
        m.as_str().to_string()
    }
}

impl fmt::Display for OffsetMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
