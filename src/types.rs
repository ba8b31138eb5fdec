//! Foundation types: path point tags, fill modes, points, and rectangles.
//!
//! A path is stored as two parallel sequences: one of 2D points and one of
//! type tags. The low three bits of a tag carry the segment type (start of
//! figure, line, or cubic Bezier control/end point); the high bits carry
//! per-point flags (path marker, close-subpath).

/// Tag value for a point that begins a new sub-figure.
pub const PATH_TYPE_START: u8 = 0x00;
/// Tag value for a straight line segment endpoint.
pub const PATH_TYPE_LINE: u8 = 0x01;
/// Tag value for a cubic Bezier control or end point.
pub const PATH_TYPE_BEZIER: u8 = 0x03;
/// Mask selecting the segment-type bits of a tag.
pub const PATH_TYPE_MASK: u8 = 0x07;

/// Flag: application-defined path marker. No geometric effect.
pub const PATH_FLAG_MARKER: u8 = 0x20;
/// Flag: this point ends a sub-figure that connects back to its start.
pub const PATH_FLAG_CLOSE: u8 = 0x80;

/// Extract the segment-type bits of a tag.
#[inline]
pub fn segment_type(t: u8) -> u8 {
    t & PATH_TYPE_MASK
}

/// Returns `true` if the tag begins a sub-figure.
#[inline]
pub fn is_start(t: u8) -> bool {
    segment_type(t) == PATH_TYPE_START
}

/// Returns `true` if the tag is a line endpoint.
#[inline]
pub fn is_line(t: u8) -> bool {
    segment_type(t) == PATH_TYPE_LINE
}

/// Returns `true` if the tag is a Bezier control or end point.
#[inline]
pub fn is_bezier(t: u8) -> bool {
    segment_type(t) == PATH_TYPE_BEZIER
}

/// Returns `true` if the tag carries the close-subpath flag.
#[inline]
pub fn is_closed(t: u8) -> bool {
    (t & PATH_FLAG_CLOSE) != 0
}

/// Returns `true` if the tag carries the path-marker flag.
#[inline]
pub fn has_marker(t: u8) -> bool {
    (t & PATH_FLAG_MARKER) != 0
}

/// Fill rule consumed by region and rendering collaborators.
///
/// The path core only stores and copies this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Even-odd rule: a point is inside if a ray crosses the boundary an
    /// odd number of times.
    Alternate = 0,
    /// Non-zero winding rule: a point is inside if the signed crossing
    /// count is non-zero.
    Winding = 1,
}

/// A 2D point with `f64` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by origin and extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}
