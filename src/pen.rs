//! Stroke pen attributes.
//!
//! A `Pen` carries everything the widening pass needs: line width, end cap
//! shapes, join style and miter limit, plus dash settings and alignment that
//! are accepted but only approximated (the widener logs them and strokes as
//! a solid, center-aligned line).

/// Shape drawn at the ends of an open stroked figure.
///
/// Values with bit `0x10` set are anchor caps; they do not change the
/// stroke outline but inflate the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Flat = 0x00,
    Square = 0x01,
    Round = 0x02,
    Triangle = 0x03,
    NoAnchor = 0x10,
    SquareAnchor = 0x11,
    RoundAnchor = 0x12,
    DiamondAnchor = 0x13,
    ArrowAnchor = 0x14,
    Custom = 0xff,
}

impl LineCap {
    /// Returns `true` for the anchor cap family.
    pub fn is_anchor(self) -> bool {
        (self as u32) & 0x10 != 0
    }
}

/// Shape of the corner where two stroked segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter = 0,
    Bevel = 1,
    Round = 2,
    MiterClipped = 3,
}

/// Cap shape at dash ends. Only meaningful with a non-solid dash style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashCap {
    Flat = 0,
    Round = 2,
    Triangle = 3,
}

/// Dash pattern selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashStyle {
    Solid = 0,
    Dash = 1,
    Dot = 2,
    DashDot = 3,
    DashDotDot = 4,
    Custom = 5,
}

/// Placement of the stroke relative to the path spine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenAlignment {
    Center = 0,
    Inset = 1,
}

/// Stroke attributes consumed by widening and bounds inflation.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub width: f64,
    pub start_cap: LineCap,
    pub end_cap: LineCap,
    pub dash_cap: DashCap,
    pub join: LineJoin,
    pub miter_limit: f64,
    pub dash_style: DashStyle,
    pub alignment: PenAlignment,
}

impl Pen {
    /// Pen of the given width with default attributes.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            width: 1.0,
            start_cap: LineCap::Flat,
            end_cap: LineCap::Flat,
            dash_cap: DashCap::Flat,
            join: LineJoin::Miter,
            miter_limit: 10.0,
            dash_style: DashStyle::Solid,
            alignment: PenAlignment::Center,
        }
    }
}
