use std::cmp::Ordering;

use super::predicates::cross;
use super::types::Point2D;

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Collinear points on the hull are dropped. `None` for fewer than three
/// distinct non-collinear points.
pub fn convex_hull(points: &[Point2D]) -> Option<Vec<Point2D>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point2D> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2D> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}

/// Strictly convex with counterclockwise turns at every vertex.
pub fn is_strictly_convex_ccw(verts: &[Point2D]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| cross(verts[i], verts[(i + 1) % n], verts[(i + 2) % n]) > 0.0)
}
