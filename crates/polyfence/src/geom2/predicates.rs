//! Orientation and segment-crossing predicates.
//!
//! The crossing test is the classic CCW comparison on a strict `>`. A zero
//! cross product (collinear triple, zero-length edge) is not special-cased:
//! it reads as "not counterclockwise" and flows through the boolean
//! comparison as-is. Touching or overlapping collinear segments are therefore
//! reported however the comparison happens to fall. Callers that need robust
//! degenerate handling must not rely on `segments_intersect`.

use super::types::{Orientation, Point2D, Segment};

/// `(r.y - p.y)(q.x - p.x) - (q.y - p.y)(r.x - p.x)`.
///
/// Positive when `p → q → r` turns counterclockwise.
#[inline]
pub fn cross(p: Point2D, q: Point2D, r: Point2D) -> f64 {
    (r.y - p.y) * (q.x - p.x) - (q.y - p.y) * (r.x - p.x)
}

/// Strict counterclockwise test; collinear triples are `false`.
#[inline]
pub fn ccw(p: Point2D, q: Point2D, r: Point2D) -> bool {
    (r.y - p.y) * (q.x - p.x) > (q.y - p.y) * (r.x - p.x)
}

/// Signed turn direction of `p → q → r` (exact zero is `Collinear`).
#[inline]
pub fn orientation(p: Point2D, q: Point2D, r: Point2D) -> Orientation {
    let c = cross(p, q, r);
    if c > 0.0 {
        Orientation::CounterClockwise
    } else if c < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Segments `AB` and `CD` cross iff `A`, `B` lie on different sides of `CD`
/// and `C`, `D` lie on different sides of `AB`.
#[inline]
pub fn segments_intersect(s: &Segment, t: &Segment) -> bool {
    ccw(s.a, t.a, t.b) != ccw(s.b, t.a, t.b) && ccw(s.a, s.b, t.a) != ccw(s.a, s.b, t.b)
}

/// Exact on-segment test: zero cross product and inside the segment's box.
#[inline]
pub fn point_on_segment(p: Point2D, s: &Segment) -> bool {
    cross(s.a, s.b, p) == 0.0 && s.bounds().contains(p)
}
