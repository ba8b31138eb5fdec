//! Glyph outline producer boundary.
//!
//! Text layout and font rasterization live outside this crate. A font
//! backend implements [`GlyphOutlineSource`] and hands over one glyph's
//! contours at a time; the path core appends them as ordinary figures.

use crate::error::{Error, Result};
use crate::types::Point;

/// One run of segments inside a contour.
#[derive(Debug, Clone, PartialEq)]
pub enum ContourSegment {
    /// Consecutive line endpoints.
    Lines(Vec<Point>),
    /// Cubic Bezier points, three per curve (two controls and an endpoint).
    Beziers(Vec<Point>),
}

/// A closed glyph contour: a start point followed by segment runs.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphContour {
    pub start: Point,
    pub segments: Vec<ContourSegment>,
}

impl GlyphContour {
    /// Checks that every Bezier run carries a whole number of curves.
    pub fn validate(&self) -> Result<()> {
        for seg in &self.segments {
            if let ContourSegment::Beziers(pts) = seg {
                if pts.is_empty() || pts.len() % 3 != 0 {
                    return Err(Error::InvalidArgument);
                }
            }
        }
        Ok(())
    }
}

/// Produces glyph outlines one glyph at a time.
///
/// `next_glyph` returns `Ok(None)` when the text run is exhausted. An error
/// from the source aborts the append and leaves the path unchanged.
pub trait GlyphOutlineSource {
    fn next_glyph(&mut self) -> Result<Option<Vec<GlyphContour>>>;
}
