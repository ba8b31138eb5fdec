//! Adaptive cubic-Bezier flattening.
//!
//! A cubic is split at its parametric midpoint until each piece's midpoint
//! deviates from the chord by less than the flatness tolerance. Subdivision
//! uses an explicit work stack with a fixed depth budget, so pathological
//! input cannot exhaust the call stack.

use crate::types::{Point, PATH_TYPE_LINE};

/// Default flatness tolerance, in the same units as the path coordinates.
pub const DEFAULT_FLATNESS: f64 = 0.25;

/// Maximum subdivision depth per cubic segment.
const FLATTEN_RECURSION_LIMIT: u32 = 32;

#[inline]
fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Twice the area of the triangle (a, m, d) is at most `flatness` times the
/// chord length, meaning the midpoint deviates from the chord by less than
/// half the tolerance.
#[inline]
fn is_flat(a: Point, d: Point, m: Point, flatness: f64) -> bool {
    let area2 = ((d.y - a.y) * m.x + (a.x - d.x) * m.y + (a.y * d.x - a.x * d.y)).abs();
    let chord = ((d.x - a.x) * (d.x - a.x) + (d.y - a.y) * (d.y - a.y)).sqrt();
    area2 <= 0.5 * flatness * chord
}

/// Flatten one cubic Bezier into line endpoints appended to `out`.
///
/// The start point `p0` is assumed already emitted; the produced points are
/// tagged Line except the final one, which carries `end_type` so close and
/// marker flags survive flattening.
pub fn flatten_cubic(
    out: &mut Vec<(Point, u8)>,
    p0: Point,
    c1: Point,
    c2: Point,
    p3: Point,
    end_type: u8,
    flatness: f64,
) {
    let mut stack: Vec<(Point, Point, Point, Point, u32)> = vec![(p0, c1, c2, p3, 0)];

    while let Some((a, b, c, d, depth)) = stack.pop() {
        let ab = midpoint(a, b);
        let bc = midpoint(b, c);
        let cd = midpoint(c, d);
        let abc = midpoint(ab, bc);
        let bcd = midpoint(bc, cd);
        let m = midpoint(abc, bcd);

        if depth >= FLATTEN_RECURSION_LIMIT || is_flat(a, d, m, flatness) {
            out.push((d, PATH_TYPE_LINE));
        } else {
            // Right half first so the left half is processed next and the
            // output stays in curve order.
            stack.push((m, bcd, cd, d, depth + 1));
            stack.push((a, ab, abc, m, depth + 1));
        }
    }

    if let Some(last) = out.last_mut() {
        last.1 = end_type;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PATH_FLAG_CLOSE, PATH_TYPE_LINE};

    #[test]
    fn test_collinear_cubic_is_one_segment() {
        let mut out = Vec::new();
        flatten_cubic(
            &mut out,
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
            PATH_TYPE_LINE,
            DEFAULT_FLATNESS,
        );
        assert_eq!(out.len(), 1);
        assert!((out[0].0.x - 3.0).abs() < 1e-12);
        assert_eq!(out[0].1, PATH_TYPE_LINE);
    }

    #[test]
    fn test_end_type_carried_to_last_point() {
        let mut out = Vec::new();
        flatten_cubic(
            &mut out,
            Point::new(0.0, 0.0),
            Point::new(0.0, 50.0),
            Point::new(50.0, 50.0),
            Point::new(50.0, 0.0),
            PATH_TYPE_LINE | PATH_FLAG_CLOSE,
            DEFAULT_FLATNESS,
        );
        assert!(out.len() > 1);
        let (last, rest) = out.split_last().unwrap();
        assert_eq!(last.1, PATH_TYPE_LINE | PATH_FLAG_CLOSE);
        for (_, t) in rest {
            assert_eq!(*t, PATH_TYPE_LINE);
        }
    }

    #[test]
    fn test_output_within_tolerance() {
        // Every produced point must lie close to the true curve; sample the
        // curve densely and check each output point against it.
        let p0 = Point::new(0.0, 0.0);
        let c1 = Point::new(0.0, 100.0);
        let c2 = Point::new(100.0, 100.0);
        let p3 = Point::new(100.0, 0.0);
        let mut out = Vec::new();
        flatten_cubic(&mut out, p0, c1, c2, p3, PATH_TYPE_LINE, DEFAULT_FLATNESS);

        let eval = |t: f64| {
            let u = 1.0 - t;
            Point::new(
                u * u * u * p0.x + 3.0 * u * u * t * c1.x + 3.0 * u * t * t * c2.x + t * t * t * p3.x,
                u * u * u * p0.y + 3.0 * u * u * t * c1.y + 3.0 * u * t * t * c2.y + t * t * t * p3.y,
            )
        };
        for (p, _) in &out {
            let mut best = f64::MAX;
            for i in 0..=1000 {
                let q = eval(i as f64 / 1000.0);
                let d = (q.x - p.x) * (q.x - p.x) + (q.y - p.y) * (q.y - p.y);
                best = best.min(d);
            }
            assert!(best.sqrt() < DEFAULT_FLATNESS);
        }
    }

    #[test]
    fn test_tighter_flatness_produces_more_points() {
        let p0 = Point::new(0.0, 0.0);
        let c1 = Point::new(0.0, 100.0);
        let c2 = Point::new(100.0, 100.0);
        let p3 = Point::new(100.0, 0.0);
        let mut coarse = Vec::new();
        let mut fine = Vec::new();
        flatten_cubic(&mut coarse, p0, c1, c2, p3, PATH_TYPE_LINE, 1.0);
        flatten_cubic(&mut fine, p0, c1, c2, p3, PATH_TYPE_LINE, 0.01);
        assert!(fine.len() > coarse.len());
    }

    #[test]
    fn test_degenerate_cubic_terminates() {
        // All four points coincident still emits the endpoint.
        let p = Point::new(5.0, 5.0);
        let mut out = Vec::new();
        flatten_cubic(&mut out, p, p, p, p, PATH_TYPE_LINE, DEFAULT_FLATNESS);
        assert!(!out.is_empty());
    }
}
