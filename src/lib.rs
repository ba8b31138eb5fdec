//! # pathwork
//!
//! 2D vector-path geometry: figure-structured path construction, adaptive
//! cubic Bezier flattening, stroke outline generation, and bounding boxes.
//!
//! A path is a sequence of points tagged with segment types (start of
//! figure, line, Bezier control point) and flags (marker, close subpath),
//! grouped into sub-figures. The crate builds such paths from geometric
//! primitives and transforms them; it performs no rasterization.
//!
//! ## Pipeline
//!
//! 1. **Build** — append lines, Beziers, arcs, pies, ellipses, rectangles,
//!    polygons, cardinal splines, other paths, or glyph outlines
//! 2. **Mutate** — close figures, set markers, reverse, transform
//! 3. **Flatten** — replace every curve with line segments within a
//!    flatness tolerance
//! 4. **Widen** — replace the spine with the outline a pen would paint
//! 5. **Query** — point data, bounds, point-in-path via a region
//!    collaborator

pub mod arc;
mod bounds;
pub mod error;
pub mod flatten;
pub mod glyph;
pub mod matrix;
pub mod path;
pub mod pen;
pub mod region;
pub mod spline;
pub mod types;
mod widen;

pub use error::{Error, Result};
pub use flatten::DEFAULT_FLATNESS;
pub use glyph::{ContourSegment, GlyphContour, GlyphOutlineSource};
pub use matrix::Matrix;
pub use path::Path;
pub use pen::{DashCap, DashStyle, LineCap, LineJoin, Pen, PenAlignment};
pub use region::PathHitTester;
pub use types::{FillMode, Point, Rect};
