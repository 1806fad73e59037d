//! Flat call surface for callers that only need the two checks.
//!
//! Takes and returns plain `[f64; 2]` pairs so adapters for a mapping library
//! do not have to depend on nalgebra.

use crate::geom2::{self, Point2D, Polygon};
use crate::query::{self, Verdict};

#[inline]
fn to_point(p: [f64; 2]) -> Point2D {
    Point2D::new(p[0], p[1])
}

/// Would the last edge of the trail self-intersect?
pub fn check(vertices: &[[f64; 2]]) -> bool {
    let v: Vec<Point2D> = vertices.iter().copied().map(to_point).collect();
    geom2::check(&v)
}

/// Same as `check`, for a ring that repeats its first vertex at the end.
pub fn check_ring(ring: &[[f64; 2]]) -> bool {
    let v: Vec<Point2D> = ring.iter().copied().map(to_point).collect();
    geom2::check_ring(&v)
}

/// Even-odd containment; `false` for fewer than three vertices.
pub fn contains(polygon: &[[f64; 2]], point: [f64; 2]) -> bool {
    let v: Vec<Point2D> = polygon.iter().copied().map(to_point).collect();
    geom2::contains_points(&v, to_point(point))
}

/// `Unavailable` when either input is missing or the polygon has fewer than
/// three vertices.
pub fn locate(polygon: Option<&[[f64; 2]]>, point: Option<[f64; 2]>) -> Verdict {
    let poly = polygon
        .and_then(|ring| Polygon::from_ring(&ring.iter().copied().map(to_point).collect::<Vec<_>>()));
    query::query(poly.as_ref(), point.map(to_point))
}
