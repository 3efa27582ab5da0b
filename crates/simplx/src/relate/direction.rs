//! Directional relation: which side of the path a constraint lies on.
//!
//! The loop `p_i ..= p_j -> p_i` bounds the region a collapse sweeps over.
//! A constraint vertex strictly inside that region (non-zero winding) ends
//! up on the other side of the path once the chord replaces the sub-chain.
//! Vertices on the loop itself are left to the geometric test.

use crate::geom::cfg::EPS;
use crate::geom::{point_segment_distance, winding_number, Polygon, Pt, Segment};

/// True if collapsing `chain` to its end chord flips `polygon` across the path.
pub fn swept_region_contains(chain: &[Pt], polygon: &Polygon) -> bool {
    let mut ring: Vec<Pt> = Vec::with_capacity(chain.len() + 1);
    ring.extend_from_slice(chain);
    ring.push(chain[0]);

    polygon.vertices().iter().any(|v| {
        let on_loop = ring
            .windows(2)
            .any(|w| point_segment_distance(*v, &Segment::new(w[0], w[1])) <= EPS);
        !on_loop && winding_number(*v, &ring) != 0
    })
}
