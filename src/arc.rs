//! Elliptical-arc to poly-Bezier conversion.
//!
//! An arc of a given start angle and sweep (degrees, clockwise positive) is
//! approximated by up to four cubic Bezier pieces, each spanning at most 90
//! degrees of arc. The output is `1 + 3k` points for `k` pieces; a zero
//! sweep yields no points.

use crate::types::{deg2rad, Point};

use std::f64::consts::PI;

/// Maximum number of points produced by one conversion: four quarter-turn
/// pieces, `1 + 3 * 4`.
pub const MAX_ARC_POINTS: usize = 13;

/// Angles are specified on the stretched ellipse; convert one to the
/// parametric angle of the unit circle before placing control points.
fn unstretch_angle(angle: f64, rad_x: f64, rad_y: f64) -> f64 {
    if angle.cos().abs() < 1e-5 || angle.sin().abs() < 1e-5 {
        return angle;
    }
    let stretched = (angle.sin() / rad_y.abs()).atan2(angle.cos() / rad_x.abs());
    let revs_off = (angle / (2.0 * PI)).round() - (stretched / (2.0 * PI)).round();
    stretched + revs_off * 2.0 * PI
}

/// Append one arc piece of at most a quarter turn as a cubic Bezier.
///
/// `start` and `end` are parametric angles in radians. Writes the on-curve
/// start point only when `write_first` is set; subsequent pieces reuse the
/// previous piece's end point.
#[allow(clippy::too_many_arguments)]
fn add_arc_part(
    out: &mut Vec<Point>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    start: f64,
    end: f64,
    write_first: bool,
) {
    let rad_x = width / 2.0;
    let rad_y = height / 2.0;
    let center_x = x + rad_x;
    let center_y = y + rad_y;

    let (sin_start, cos_start) = start.sin_cos();
    let (sin_end, cos_end) = end.sin_cos();

    let half = (end - start) / 2.0;
    let a = 4.0 / 3.0 * (1.0 - half.cos()) / half.sin();

    let unit = [
        Point::new(cos_start, sin_start),
        Point::new(cos_start - a * sin_start, sin_start + a * cos_start),
        Point::new(cos_end + a * sin_end, sin_end - a * cos_end),
        Point::new(cos_end, sin_end),
    ];

    let first = if write_first { 0 } else { 1 };
    for p in &unit[first..] {
        out.push(Point::new(p.x * rad_x + center_x, p.y * rad_y + center_y));
    }
}

/// Convert an elliptical arc to a sequence of cubic Bezier points.
///
/// The ellipse is inscribed in the rectangle `(x, y, width, height)`;
/// `start_angle` and `sweep_angle` are in degrees, clockwise positive.
/// Sweeps beyond a full turn are truncated to four quarter pieces. Returns
/// an empty vector for a zero sweep.
pub fn arc_to_poly_bezier(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    start_angle: f64,
    sweep_angle: f64,
) -> Vec<Point> {
    let end_angle = start_angle + sweep_angle;
    let rad_x = width / 2.0;
    let rad_y = height / 2.0;

    let end = unstretch_angle(deg2rad(end_angle), rad_x, rad_y);
    let mut current = unstretch_angle(deg2rad(start_angle), rad_x, rad_y);

    let mut out = Vec::new();
    for _ in 0..(MAX_ARC_POINTS - 1) / 3 {
        let part_end;
        if sweep_angle > 0.0 {
            if current >= end {
                break;
            }
            part_end = (current + PI / 2.0).min(end);
        } else {
            if current <= end {
                break;
            }
            part_end = (current - PI / 2.0).max(end);
        }

        let write_first = out.is_empty();
        add_arc_part(&mut out, x, y, width, height, current, part_end, write_first);

        current += (PI / 2.0) * if sweep_angle < 0.0 { -1.0 } else { 1.0 };
    }

    out
}
