//! World bounding box of a path.
//!
//! The box is the axis-aligned hull of the stored points, optionally run
//! through a transform and inflated for a stroking pen. It bounds the point
//! set, not the rendered curve, so Bezier control points count toward it.

use crate::matrix::Matrix;
use crate::path::Path;
use crate::pen::Pen;
use crate::types::{Point, Rect};

pub(crate) fn world_bounds(path: &Path, matrix: Option<&Matrix>, pen: Option<&Pen>) -> Rect {
    let points = path.points();
    if points.is_empty() {
        return Rect::default();
    }

    let mut low = points[0];
    let mut high = points[0];
    for p in points {
        low.x = low.x.min(p.x);
        low.y = low.y.min(p.y);
        high.x = high.x.max(p.x);
        high.y = high.y.max(p.y);
    }

    let mut bounds = Rect::new(low.x, low.y, high.x - low.x, high.y - low.y);

    if let Some(m) = matrix {
        let mut corners = [
            Point::new(bounds.x, bounds.y),
            Point::new(bounds.x + bounds.width, bounds.y),
            Point::new(bounds.x + bounds.width, bounds.y + bounds.height),
            Point::new(bounds.x, bounds.y + bounds.height),
        ];
        m.transform_points(&mut corners);

        let mut low_x = corners[0].x;
        let mut low_y = corners[0].y;
        for c in &corners[1..] {
            low_x = low_x.min(c.x);
            low_y = low_y.min(c.y);
        }

        // Conservative extent: each axis gets the full contribution of both
        // source extents under the linear part of the transform.
        let (w, h) = (bounds.width, bounds.height);
        bounds.x = low_x;
        bounds.y = low_y;
        bounds.width = h * m.m21.abs() + w * m.m11.abs();
        bounds.height = h * m.m22.abs() + w * m.m12.abs();
    }

    if let Some(pen) = pen {
        let mut inflate = pen.width / 2.0;
        if points.len() > 2 {
            inflate = inflate.max(pen.width * pen.miter_limit / 2.0);
        }
        if pen.end_cap.is_anchor() {
            inflate = inflate.max(pen.width * 2.2);
        }
        bounds.x -= inflate;
        bounds.y -= inflate;
        bounds.width += 2.0 * inflate;
        bounds.height += 2.0 * inflate;
    }

    bounds
}
