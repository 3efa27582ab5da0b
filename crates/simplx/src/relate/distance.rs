//! Distance-band relation.

use crate::config::Config;
use crate::geom::cfg::EPS;
use crate::geom::{chain_polygon_distance, Polygon, Pt};

/// 0: `d <= min_dist`, 1: `d <= relax_dist`, 2: `d <= threshold`, 3: beyond.
pub fn distance_band(d: f64, cfg: &Config) -> u8 {
    if d <= cfg.min_dist {
        0
    } else if d <= cfg.relax_dist {
        1
    } else if d <= cfg.threshold {
        2
    } else {
        3
    }
}

/// Collapsing `chain` to `chord` may not move the path into a nearer band,
/// and a path already within `min_dist` may not move any closer.
pub fn distance_safe(chain: &[Pt], chord: &[Pt], polygon: &Polygon, cfg: &Config) -> bool {
    let before = chain_polygon_distance(chain, polygon);
    let after = chain_polygon_distance(chord, polygon);
    let (b0, b1) = (distance_band(before, cfg), distance_band(after, cfg));
    if b1 < b0 {
        return false;
    }
    b0 > 0 || after >= before - EPS
}
