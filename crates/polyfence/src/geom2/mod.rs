//! Planar geometry core (vertex representation).
//!
//! Purpose
//! - Decide whether the edge being drawn would make a polygon self-intersect
//!   (`check`), and whether a closed polygon contains a point (`contains`).
//! - Keep everything pure and allocation-light: functions read their
//!   arguments and return a boolean, nothing is cached.
//!
//! Numerics
//! - No epsilons. The crossing predicate compares signs of exact cross
//!   products with a strict `>`; collinear input falls through that
//!   comparison unchanged. See `predicates` for the consequences.
//!
//! Code cross-refs: `Polygon`, `Segment`, `SketchCfg`, `FillRule`

mod polygon;
pub mod predicates;
pub mod rand;
mod self_intersection;
mod types;
mod util;

pub use polygon::{contains, contains_points, Polygon};
pub use predicates::{ccw, cross, orientation, point_on_segment, segments_intersect};
pub use self_intersection::{
    check, check_ring, check_ring_with, check_with, first_crossing_ring_with, first_crossing_with,
    is_closing,
};
pub use types::{
    Bounds2, FillRule, Orientation, Point2D, Segment, SketchCfg, CLOSING_THRESHOLD,
};
pub use util::{convex_hull, is_strictly_convex_ccw};

#[cfg(test)]
mod tests;
