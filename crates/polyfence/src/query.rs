//! Three-way containment answer for callers that may lack a polygon or a point.
//!
//! A missing input is `Unavailable`, never `Outside`.

use std::fmt;

use crate::geom2::{FillRule, Point2D, Polygon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Inside,
    Outside,
    /// No polygon or no point to test.
    Unavailable,
}

impl Verdict {
    #[inline]
    pub fn is_available(self) -> bool {
        self != Verdict::Unavailable
    }

    /// `None` for `Unavailable`.
    #[inline]
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Verdict::Inside => Some(true),
            Verdict::Outside => Some(false),
            Verdict::Unavailable => None,
        }
    }
}

impl From<bool> for Verdict {
    fn from(inside: bool) -> Self {
        if inside {
            Verdict::Inside
        } else {
            Verdict::Outside
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Inside => "inside",
            Verdict::Outside => "outside",
            Verdict::Unavailable => "unavailable",
        })
    }
}

#[inline]
pub fn query(polygon: Option<&Polygon>, point: Option<Point2D>) -> Verdict {
    query_with(polygon, point, FillRule::EvenOdd)
}

pub fn query_with(polygon: Option<&Polygon>, point: Option<Point2D>, rule: FillRule) -> Verdict {
    match (polygon, point) {
        (Some(poly), Some(p)) => poly.contains_with(p, rule).into(),
        _ => Verdict::Unavailable,
    }
}
