//! 2D affine transformation matrix.
//!
//! Stores six components `[m11, m12, m21, m22, dx, dy]` representing
//!
//! ```text
//!   | m11 m12 0 |
//!   | m21 m22 0 |
//!   | dx  dy  1 |
//! ```
//!
//! Points transform as row vectors: `x' = x*m11 + y*m21 + dx`,
//! `y' = x*m12 + y*m22 + dy`.

use crate::types::Point;

/// 2D affine transform applied to path point sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Matrix {
    /// Identity matrix.
    pub fn identity() -> Self {
        Self {
            m11: 1.0,
            m12: 0.0,
            m21: 0.0,
            m22: 1.0,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// Matrix from six components.
    pub fn new(m11: f64, m12: f64, m21: f64, m22: f64, dx: f64, dy: f64) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            dx,
            dy,
        }
    }

    /// Translation matrix.
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Non-uniform scaling matrix.
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation matrix, angle in radians.
    pub fn rotation(a: f64) -> Self {
        let (sin, cos) = a.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Post-multiply: `self * m`.
    pub fn multiply(&self, m: &Matrix) -> Matrix {
        Matrix::new(
            self.m11 * m.m11 + self.m12 * m.m21,
            self.m11 * m.m12 + self.m12 * m.m22,
            self.m21 * m.m11 + self.m22 * m.m21,
            self.m21 * m.m12 + self.m22 * m.m22,
            self.dx * m.m11 + self.dy * m.m21 + m.dx,
            self.dx * m.m12 + self.dy * m.m22 + m.dy,
        )
    }

    /// Transform a single point.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            p.x * self.m11 + p.y * self.m21 + self.dx,
            p.x * self.m12 + p.y * self.m22 + self.dy,
        )
    }

    /// Transform a point set in place.
    pub fn transform_points(&self, points: &mut [Point]) {
        for p in points {
            *p = self.transform_point(*p);
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}
