//! Basic 2D types shared by the predicates, the checker and the tester.
//!
//! - `Point2D`: plain `Vector2<f64>` in the caller's projection.
//! - `Segment`: ordered endpoint pair derived from adjacent vertices.
//! - `Bounds2`: axis-aligned box used for early rejection.
//! - `SketchCfg`: drawing thresholds (closing distance, point limits).
//!
//! Code cross-refs: `predicates::segments_intersect`, `polygon::Polygon`,
//! `self_intersection::check_with`

use nalgebra::Vector2;

/// Point in the caller's planar projection. No unit conversion happens here.
pub type Point2D = Vector2<f64>;

/// Distance (in caller units) under which the cursor counts as returning to
/// the first vertex. The drawing tool works in screen pixels.
pub const CLOSING_THRESHOLD: f64 = 10.0;

/// Drawing configuration (thresholds and point limits).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchCfg {
    /// Strict upper bound on `|last - first|` for the closing exemption.
    pub closing_threshold: f64,
    /// Fewest committed vertices accepted by `DrawSession::finish`.
    pub min_points: usize,
    /// Most committed vertices accepted by `DrawSession::commit`.
    pub max_points: usize,
}

impl Default for SketchCfg {
    fn default() -> Self {
        Self {
            closing_threshold: CLOSING_THRESHOLD,
            min_points: 3,
            max_points: 20,
        }
    }
}

/// Segment `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point2D,
    pub b: Point2D,
}

impl Segment {
    #[inline]
    pub fn new(a: Point2D, b: Point2D) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn vec(&self) -> Point2D {
        self.b - self.a
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.vec().norm()
    }
    #[inline]
    pub fn bounds(&self) -> Bounds2 {
        Bounds2::from_points(&[self.a, self.b]).unwrap_or(Bounds2 {
            min: self.a,
            max: self.a,
        })
    }
}

/// Closed axis-aligned box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2 {
    /// Smallest box containing all `points`; `None` for an empty slice.
    pub fn from_points(points: &[Point2D]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Bounds2 {
            min: *first,
            max: *first,
        };
        for p in rest {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }

    /// Inclusive membership.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Which crossing count makes a point inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    /// Odd number of boundary crossings along a ray.
    #[default]
    EvenOdd,
    /// Non-zero winding number.
    NonZero,
}
