//! Self-intersection check for a polygon that is still being drawn.
//!
//! Input is the ordered vertex trail with the cursor as its last entry; the
//! tentative edge is `[v[n-2], v[n-1]]`. Earlier edges `0..n-3` are tested,
//! which leaves out the neighbour ending at `v[n-2]` (it shares an endpoint).
//! Edge 0 is also skipped while the cursor sits within
//! `SketchCfg::closing_threshold` of `v[0]`, so returning to the start to
//! close the ring is not flagged.
//!
//! Code cross-refs: `predicates::segments_intersect`, `draw::DrawSession`

use super::polygon::open_ring;
use super::predicates::segments_intersect;
use super::types::{Point2D, Segment, SketchCfg};

/// `true` iff the tentative edge crosses a non-adjacent earlier edge.
/// Uses the default closing threshold.
#[inline]
pub fn check(vertices: &[Point2D]) -> bool {
    check_with(vertices, &SketchCfg::default())
}

#[inline]
pub fn check_with(vertices: &[Point2D], cfg: &SketchCfg) -> bool {
    first_crossing_with(vertices, cfg).is_some()
}

/// Closed-ring form: a trailing copy of `v[0]` is dropped before checking.
#[inline]
pub fn check_ring(ring: &[Point2D]) -> bool {
    check_ring_with(ring, &SketchCfg::default())
}

#[inline]
pub fn check_ring_with(ring: &[Point2D], cfg: &SketchCfg) -> bool {
    first_crossing_ring_with(ring, cfg).is_some()
}

/// `first_crossing_with` on a ring that may repeat `v[0]` at the end.
#[inline]
pub fn first_crossing_ring_with(ring: &[Point2D], cfg: &SketchCfg) -> Option<usize> {
    first_crossing_with(open_ring(ring), cfg)
}

/// Index of the first earlier edge crossed by the tentative edge.
pub fn first_crossing_with(vertices: &[Point2D], cfg: &SketchCfg) -> Option<usize> {
    let n = vertices.len();
    if n < 3 {
        return None;
    }
    let current = Segment::new(vertices[n - 2], vertices[n - 1]);
    let closing = is_closing(vertices[n - 1], vertices[0], cfg.closing_threshold);
    (0..n - 3).find(|&i| {
        if i == 0 && closing {
            return false;
        }
        segments_intersect(&current, &Segment::new(vertices[i], vertices[i + 1]))
    })
}

/// Cursor strictly closer than `threshold` to the first vertex.
#[inline]
pub fn is_closing(cursor: Point2D, first: Point2D, threshold: f64) -> bool {
    (cursor - first).norm() < threshold
}
