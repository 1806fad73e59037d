//! Headless drawing session: vertex-by-vertex polygon input.
//!
//! Models the interaction layer that owns the vertex trail. Every cursor move
//! re-runs the self-intersection check on `committed ++ [cursor]`; while the
//! tentative edge crosses an earlier one the session reports `Style::Warning`
//! and refuses to commit the cursor. Committing a cursor within the closing
//! radius of the first vertex (once `min_points` are down) closes the ring
//! instead of adding a vertex; the commit that reaches `max_points` closes
//! it too. Rendering is left to the caller.
//!
//! Code cross-refs: `geom2::{first_crossing_with, SketchCfg, Polygon}`

use std::fmt;

use tracing::{debug, trace};

use crate::geom2::{first_crossing_with, is_closing, Point2D, Polygon, SketchCfg};

/// How the caller should render the sketch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Normal,
    /// The tentative edge crosses an earlier edge.
    Warning,
}

/// What a successful `commit` did.
#[derive(Clone, Debug, PartialEq)]
pub enum Commit {
    /// The cursor became a new vertex.
    Added,
    /// The ring closed; the session is cleared.
    Closed(Polygon),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawError {
    /// `commit` without a prior `move_cursor`.
    NoCursor,
    /// The tentative edge crosses earlier edge `edge`.
    Intersecting { edge: usize },
    TooManyPoints { max: usize },
    TooFewPoints { min: usize, got: usize },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::NoCursor => write!(f, "no cursor position to commit"),
            DrawError::Intersecting { edge } => {
                write!(f, "tentative edge crosses edge {edge}")
            }
            DrawError::TooManyPoints { max } => write!(f, "polygon already has {max} points"),
            DrawError::TooFewPoints { min, got } => {
                write!(f, "polygon needs at least {min} points, got {got}")
            }
        }
    }
}

impl std::error::Error for DrawError {}

#[derive(Clone, Debug, Default)]
pub struct DrawSession {
    cfg: SketchCfg,
    committed: Vec<Point2D>,
    cursor: Option<Point2D>,
    crossing: Option<usize>,
}

impl DrawSession {
    pub fn new(cfg: SketchCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn cfg(&self) -> &SketchCfg {
        &self.cfg
    }

    #[inline]
    pub fn committed(&self) -> &[Point2D] {
        &self.committed
    }

    #[inline]
    pub fn cursor(&self) -> Option<Point2D> {
        self.cursor
    }

    /// Committed vertices followed by the cursor, if any.
    pub fn vertices(&self) -> Vec<Point2D> {
        let mut v = self.committed.clone();
        v.extend(self.cursor);
        v
    }

    #[inline]
    pub fn style(&self) -> Style {
        if self.crossing.is_some() {
            Style::Warning
        } else {
            Style::Normal
        }
    }

    pub fn move_cursor(&mut self, p: Point2D) -> Style {
        self.cursor = Some(p);
        self.crossing = first_crossing_with(&self.vertices(), &self.cfg);
        trace!(x = p.x, y = p.y, crossing = ?self.crossing, "cursor");
        self.style()
    }

    /// Append the cursor as a vertex, or close the ring when the cursor is
    /// back at the start or the vertex limit is reached.
    pub fn commit(&mut self) -> Result<Commit, DrawError> {
        let p = self.cursor.ok_or(DrawError::NoCursor)?;
        if let Some(edge) = self.crossing {
            debug!(edge, "commit refused: crossing");
            return Err(DrawError::Intersecting { edge });
        }
        let count = self.committed.len();
        if count >= self.min_points()
            && is_closing(p, self.committed[0], self.cfg.closing_threshold)
        {
            debug!(count, "cursor back at start");
            return self.close(self.committed.clone()).map(Commit::Closed);
        }
        if count >= self.cfg.max_points {
            debug!(max = self.cfg.max_points, "commit refused: point limit");
            return Err(DrawError::TooManyPoints {
                max: self.cfg.max_points,
            });
        }
        if count + 1 == self.cfg.max_points {
            let mut verts = self.committed.clone();
            verts.push(p);
            debug!(max = self.cfg.max_points, "point limit reached");
            return self.close(verts).map(Commit::Closed);
        }
        self.committed.push(p);
        self.cursor = None;
        debug!(count = count + 1, "vertex committed");
        Ok(Commit::Added)
    }

    /// Close the ring from the committed vertices and hand out the polygon.
    pub fn finish(&mut self) -> Result<Polygon, DrawError> {
        self.close(self.committed.clone())
    }

    #[inline]
    fn min_points(&self) -> usize {
        self.cfg.min_points.max(3)
    }

    /// The closing edge back to `verts[0]` is checked like any tentative
    /// edge. On success the session is cleared; on failure it is untouched.
    fn close(&mut self, verts: Vec<Point2D>) -> Result<Polygon, DrawError> {
        let got = verts.len();
        let min = self.min_points();
        if got < min {
            debug!(got, min, "close refused: too few points");
            return Err(DrawError::TooFewPoints { min, got });
        }
        let mut ring = verts.clone();
        ring.push(verts[0]);
        if let Some(edge) = first_crossing_with(&ring, &self.cfg) {
            debug!(edge, "close refused: closing edge crosses");
            return Err(DrawError::Intersecting { edge });
        }
        let poly = Polygon::new(verts).ok_or(DrawError::TooFewPoints { min, got })?;
        self.clear();
        debug!(vertices = poly.len(), "polygon closed");
        Ok(poly)
    }

    pub fn clear(&mut self) {
        self.committed.clear();
        self.cursor = None;
        self.crossing = None;
    }
}
