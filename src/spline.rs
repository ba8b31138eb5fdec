//! Cardinal-spline control-point math.
//!
//! A curve through a sequence of points is built as one cubic Bezier per
//! input segment; the control points come from the neighbouring points
//! scaled by the curve tension.

use crate::types::Point;

/// Tension values are scaled by this factor before use, so a tension of 1.0
/// places control points at 0.3 of the neighbour chord.
pub const TENSION_SCALE: f64 = 0.3;

/// Control points flanking `cur`, derived from the chord between its
/// neighbours. `coef` is the already-scaled tension.
pub fn curve_control_points(prev: Point, cur: Point, next: Point, coef: f64) -> (Point, Point) {
    let dx = next.x - prev.x;
    let dy = next.y - prev.y;
    (
        Point::new(cur.x - coef * dx, cur.y - coef * dy),
        Point::new(cur.x + coef * dx, cur.y + coef * dy),
    )
}

/// Control point next to an endpoint of an open curve: pulled from the
/// endpoint toward its single neighbour by the raw tension.
pub fn curve_end_control(end: Point, adj: Point, tension: f64) -> Point {
    Point::new(
        end.x + tension * (adj.x - end.x),
        end.y + tension * (adj.y - end.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_controls_straddle_the_point() {
        let (before, after) = curve_control_points(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
            0.15,
        );
        assert!((before.x - 7.0).abs() < 1e-12);
        assert!((before.y - 10.0).abs() < 1e-12);
        assert!((after.x - 13.0).abs() < 1e-12);
        assert!((after.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_tension_collapses_controls() {
        let cur = Point::new(5.0, 5.0);
        let (before, after) =
            curve_control_points(Point::new(0.0, 0.0), cur, Point::new(10.0, 0.0), 0.0);
        assert_eq!(before, cur);
        assert_eq!(after, cur);
    }

    #[test]
    fn test_end_control_moves_toward_neighbour() {
        let c = curve_end_control(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.5);
        assert!((c.x - 5.0).abs() < 1e-12);
        assert!(c.y.abs() < 1e-12);
    }
}
