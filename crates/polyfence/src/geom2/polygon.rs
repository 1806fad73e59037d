//! Simple polygons in vertex representation and point containment.
//!
//! Purpose
//! - Hold a caller-drawn ring (>= 3 vertices, implicitly closed) and answer
//!   point-in-polygon queries.
//!
//! Conventions
//! - Edge `i` runs from `v[i]` to `v[(i + 1) % n]`.
//! - Points exactly on the boundary are outside under every `FillRule`. The
//!   test is exact, so repeated queries on the same input agree.
//! - Self-intersecting or collinear rings are accepted as given; no
//!   validation beyond the vertex count.
//!
//! Code cross-refs: `predicates::{cross, point_on_segment}`, `types::FillRule`

use super::predicates::{cross, point_on_segment};
use super::types::{Bounds2, FillRule, Orientation, Point2D, Segment};

/// Closed polygon with at least three vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Point2D>,
}

impl Polygon {
    /// `None` if fewer than three vertices are given.
    pub fn new(verts: Vec<Point2D>) -> Option<Self> {
        if verts.len() < 3 {
            return None;
        }
        Some(Self { verts })
    }

    /// Build from a closed ring whose last vertex repeats the first (the
    /// layout mapping libraries hand out). The repeated vertex is dropped;
    /// an open ring is accepted unchanged.
    pub fn from_ring(ring: &[Point2D]) -> Option<Self> {
        Self::new(open_ring(ring).to_vec())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2D] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Edge `i` (indices wrap modulo `len`).
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        let n = self.verts.len();
        Segment::new(self.verts[i % n], self.verts[(i + 1) % n])
    }

    /// All `len` edges, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.verts.len()).map(move |i| self.edge(i))
    }

    pub fn bounds(&self) -> Bounds2 {
        let first = self.verts[0];
        Bounds2::from_points(&self.verts).unwrap_or(Bounds2 {
            min: first,
            max: first,
        })
    }

    /// Shoelace area; positive for counterclockwise rings.
    pub fn signed_area(&self) -> f64 {
        let mut a = 0.0;
        for e in self.edges() {
            a += e.a.x * e.b.y - e.b.x * e.a.y;
        }
        0.5 * a
    }

    /// `Collinear` for zero-area rings.
    pub fn winding_order(&self) -> Orientation {
        let a = self.signed_area();
        if a > 0.0 {
            Orientation::CounterClockwise
        } else if a < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// Exact boundary test over all edges including the closing one.
    pub fn on_boundary(&self, p: Point2D) -> bool {
        on_boundary(&self.verts, p)
    }

    /// Winding number of the ring around `p` (counterclockwise positive).
    pub fn winding_number(&self, p: Point2D) -> i32 {
        winding_number(&self.verts, p)
    }

    /// Even-odd containment; boundary points are outside.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        self.contains_with(p, FillRule::EvenOdd)
    }

    pub fn contains_with(&self, p: Point2D, rule: FillRule) -> bool {
        contains_slice(&self.verts, p, rule)
    }
}

/// Free-function form of `Polygon::contains`.
#[inline]
pub fn contains(polygon: &Polygon, point: Point2D) -> bool {
    polygon.contains(point)
}

/// Even-odd containment on a raw vertex slice.
///
/// Fewer than three vertices is a caller error; the answer is then `false`.
pub fn contains_points(vertices: &[Point2D], point: Point2D) -> bool {
    vertices.len() >= 3 && contains_slice(vertices, point, FillRule::EvenOdd)
}

/// Strip one trailing vertex equal to the first.
pub(crate) fn open_ring(ring: &[Point2D]) -> &[Point2D] {
    match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

// `verts.len() >= 3`.
fn contains_slice(verts: &[Point2D], p: Point2D, rule: FillRule) -> bool {
    let inside_box = Bounds2::from_points(verts).is_some_and(|b| b.contains(p));
    if !inside_box || on_boundary(verts, p) {
        return false;
    }
    match rule {
        FillRule::EvenOdd => crossings_odd(verts, p),
        FillRule::NonZero => winding_number(verts, p) != 0,
    }
}

fn on_boundary(verts: &[Point2D], p: Point2D) -> bool {
    let n = verts.len();
    (0..n).any(|i| point_on_segment(p, &Segment::new(verts[i], verts[(i + 1) % n])))
}

/// Horizontal ray to +x; an edge counts when it straddles `p.y` with the
/// half-open rule (lower end inclusive) so shared vertices are counted once.
fn crossings_odd(verts: &[Point2D], p: Point2D) -> bool {
    let n = verts.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = verts[i];
        let vj = verts[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_at = vi.x + (p.y - vi.y) * (vj.x - vi.x) / (vj.y - vi.y);
            if p.x < x_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn winding_number(verts: &[Point2D], p: Point2D) -> i32 {
    let n = verts.len();
    let mut wn = 0;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y && cross(a, b, p) > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && cross(a, b, p) < 0.0 {
            wn -= 1;
        }
    }
    wn
}
