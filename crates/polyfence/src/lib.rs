//! Planar geometry core for a polygon-drawing tool.
//!
//! Two pure operations carry the crate:
//! - `geom2::check`: would the edge being drawn make the polygon
//!   self-intersect?
//! - `geom2::contains`: does a closed polygon contain a point?
//!
//! `draw` and `query` model the callers around them (a drawing session and a
//! three-way containment answer) without any rendering or I/O.
//!
//! Coordinates are plain `nalgebra::Vector2<f64>` in whatever planar
//! projection the caller uses; projection changes happen outside this crate.

pub mod api;
pub mod draw;
pub mod geom2;
pub mod query;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::draw::{Commit, DrawError, DrawSession, Style};
    pub use crate::geom2::{
        check, check_ring, check_with, contains, FillRule, Point2D, Polygon, Segment, SketchCfg,
    };
    pub use crate::query::{query, Verdict};
    pub use nalgebra::{vector, Vector2 as Vec2};
}
