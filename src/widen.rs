//! Stroke outline generation.
//!
//! Widening replaces a path's spine with the outline of the area a pen of
//! the given width would paint. Curves are flattened first, so joins and
//! caps only ever deal with straight segments. Each open figure produces
//! one closed loop (around both sides and the two caps); each closed figure
//! produces two closed loops, one per side.

use log::warn;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::path::Path;
use crate::pen::{DashCap, DashStyle, LineCap, LineJoin, Pen, PenAlignment};
use crate::types::{
    is_closed, is_start, Point, PATH_FLAG_CLOSE, PATH_TYPE_BEZIER, PATH_TYPE_LINE, PATH_TYPE_START,
};

/// Offset `endpoint` perpendicular to the segment toward `nextpoint`, by
/// half the pen width, on the requested side.
fn add_bevel_point(
    endpoint: Point,
    nextpoint: Point,
    pen: &Pen,
    right_side: bool,
    out: &mut Vec<(Point, u8)>,
) {
    let segment_dx = nextpoint.x - endpoint.x;
    let segment_dy = nextpoint.y - endpoint.y;
    let segment_length = (segment_dy * segment_dy + segment_dx * segment_dx).sqrt();
    let distance = pen.width / 2.0;

    let (bevel_dx, bevel_dy) = if right_side {
        (
            -distance * segment_dy / segment_length,
            distance * segment_dx / segment_length,
        )
    } else {
        (
            distance * segment_dy / segment_length,
            -distance * segment_dx / segment_length,
        )
    };

    out.push((
        Point::new(endpoint.x + bevel_dx, endpoint.y + bevel_dy),
        PATH_TYPE_LINE,
    ));
}

/// Emit the outer corner at `p2` for the turn `p1 -> p2 -> p3`.
///
/// Miter joins compute the offset-line intersection and fall back to a
/// bevel past the miter limit or when the turn does not face the outline
/// side being traced.
fn widen_joint(p1: Point, p2: Point, p3: Point, pen: &Pen, out: &mut Vec<(Point, u8)>) {
    if matches!(pen.join, LineJoin::Miter | LineJoin::MiterClipped)
        && (p2.x - p1.x) * (p3.y - p1.y) > (p2.y - p1.y) * (p3.x - p1.x)
    {
        let distance = pen.width / 2.0;
        let length_0 = ((p2.x - p1.x) * (p2.x - p1.x) + (p2.y - p1.y) * (p2.y - p1.y)).sqrt();
        let length_1 = ((p3.x - p2.x) * (p3.x - p2.x) + (p3.y - p2.y) * (p3.y - p2.y)).sqrt();
        let dx0 = distance * (p2.x - p1.x) / length_0;
        let dy0 = distance * (p2.y - p1.y) / length_0;
        let dx1 = distance * (p3.x - p2.x) / length_1;
        let dy1 = distance * (p3.y - p2.y) / length_1;
        let det = dy0 * dx1 - dx0 * dy1;
        let dx = (dx0 * dx1 * (dx0 - dx1) + dy0 * dy0 * dx1 - dy1 * dy1 * dx0) / det;
        let dy = (dy0 * dy1 * (dy0 - dy1) + dx0 * dx0 * dy1 - dx1 * dx1 * dy0) / det;
        if dx * dx + dy * dy < pen.miter_limit * pen.miter_limit * distance * distance {
            out.push((Point::new(p2.x + dx, p2.y + dy), PATH_TYPE_LINE));
            return;
        }
        if pen.join == LineJoin::Miter {
            warn!("should add a clipped corner");
        }
    }

    add_bevel_point(p2, p1, pen, true, out);
    add_bevel_point(p2, p3, pen, false, out);
}

/// Emit a cap at `endpoint` for a segment heading toward `nextpoint`.
///
/// The cap's two corner points are shared with the adjacent outline sides;
/// `add_first_points` and `add_last_point` select which of them this call
/// contributes.
fn widen_cap(
    endpoint: Point,
    nextpoint: Point,
    pen: &Pen,
    cap: LineCap,
    add_first_points: bool,
    add_last_point: bool,
    out: &mut Vec<(Point, u8)>,
) {
    match cap {
        LineCap::Square => {
            let segment_dx = nextpoint.x - endpoint.x;
            let segment_dy = nextpoint.y - endpoint.y;
            let segment_length = (segment_dy * segment_dy + segment_dx * segment_dx).sqrt();
            let distance = pen.width / 2.0;

            let extend_dx = -distance * segment_dx / segment_length;
            let extend_dy = -distance * segment_dy / segment_length;
            let bevel_dx = -distance * segment_dy / segment_length;
            let bevel_dy = distance * segment_dx / segment_length;

            if add_first_points {
                out.push((
                    Point::new(
                        endpoint.x + extend_dx + bevel_dx,
                        endpoint.y + extend_dy + bevel_dy,
                    ),
                    PATH_TYPE_LINE,
                ));
            }
            if add_last_point {
                out.push((
                    Point::new(
                        endpoint.x + extend_dx - bevel_dx,
                        endpoint.y + extend_dy - bevel_dy,
                    ),
                    PATH_TYPE_LINE,
                ));
            }
        }
        LineCap::Round => {
            // Two quarter-circle Bezier arcs around the endpoint; the whole
            // half circle is emitted with the cap's leading corner, so only
            // the first-points pass contributes.
            if add_first_points {
                let segment_dx = nextpoint.x - endpoint.x;
                let segment_dy = nextpoint.y - endpoint.y;
                let segment_length = (segment_dy * segment_dy + segment_dx * segment_dx).sqrt();
                let distance = pen.width / 2.0;
                let control_point_distance = 0.5522847498307935; // 4/3 * (sqrt(2) - 1)

                let dx = -distance * segment_dx / segment_length;
                let dy = -distance * segment_dy / segment_length;
                let dx2 = dx * control_point_distance;
                let dy2 = dy * control_point_distance;

                out.push((
                    Point::new(endpoint.x + dy, endpoint.y - dx),
                    PATH_TYPE_LINE,
                ));
                out.push((
                    Point::new(endpoint.x + dy + dx2, endpoint.y - dx + dy2),
                    PATH_TYPE_BEZIER,
                ));
                out.push((
                    Point::new(endpoint.x + dx + dy2, endpoint.y + dy - dx2),
                    PATH_TYPE_BEZIER,
                ));
                out.push((
                    Point::new(endpoint.x + dx, endpoint.y + dy),
                    PATH_TYPE_BEZIER,
                ));
                out.push((
                    Point::new(endpoint.x + dx - dy2, endpoint.y + dy + dx2),
                    PATH_TYPE_BEZIER,
                ));
                out.push((
                    Point::new(endpoint.x - dy + dx2, endpoint.y + dx + dy2),
                    PATH_TYPE_BEZIER,
                ));
                out.push((
                    Point::new(endpoint.x - dy, endpoint.y + dx),
                    PATH_TYPE_BEZIER,
                ));
            }
        }
        _ => {
            if add_first_points {
                add_bevel_point(endpoint, nextpoint, pen, true, out);
            }
            if add_last_point {
                add_bevel_point(endpoint, nextpoint, pen, false, out);
            }
        }
    }
}

/// Close the loop emitted since `loop_start`: retag its first point as a
/// figure start and flag its last point closed.
fn seal_loop(out: &mut Vec<(Point, u8)>, loop_start: usize) {
    out[loop_start].1 = PATH_TYPE_START;
    if let Some(last) = out.last_mut() {
        last.1 |= PATH_FLAG_CLOSE;
    }
}

/// Outline of an open figure spanning `points[start..=end]`: start cap, one
/// side, end cap, the other side, all in a single closed loop.
fn widen_open_figure(
    points: &[Point],
    pen: &Pen,
    start: usize,
    end: usize,
    out: &mut Vec<(Point, u8)>,
) {
    if end <= start {
        return;
    }

    let loop_start = out.len();

    widen_cap(
        points[start],
        points[start + 1],
        pen,
        pen.start_cap,
        false,
        true,
        out,
    );

    for i in start + 1..end {
        widen_joint(points[i - 1], points[i], points[i + 1], pen, out);
    }

    widen_cap(points[end], points[end - 1], pen, pen.end_cap, true, true, out);

    for i in (start + 1..end).rev() {
        widen_joint(points[i + 1], points[i], points[i - 1], pen, out);
    }

    widen_cap(
        points[start],
        points[start + 1],
        pen,
        pen.start_cap,
        true,
        false,
        out,
    );

    seal_loop(out, loop_start);
}

/// Outline of a closed figure spanning `points[start..=end]`: one loop per
/// side, traced in opposite directions so both wind the same way around the
/// painted ring.
fn widen_closed_figure(
    points: &[Point],
    pen: &Pen,
    start: usize,
    end: usize,
    out: &mut Vec<(Point, u8)>,
) {
    if end <= start + 1 {
        return;
    }

    // left outline
    let loop_start = out.len();

    widen_joint(points[end], points[start], points[start + 1], pen, out);
    for i in start + 1..end {
        widen_joint(points[i - 1], points[i], points[i + 1], pen, out);
    }
    widen_joint(points[end - 1], points[end], points[start], pen, out);

    seal_loop(out, loop_start);

    // right outline
    let loop_start = out.len();

    widen_joint(points[start], points[end], points[end - 1], pen, out);
    for i in (start + 1..end).rev() {
        widen_joint(points[i + 1], points[i], points[i - 1], pen, out);
    }
    widen_joint(points[start + 1], points[start], points[end], pen, out);

    seal_loop(out, loop_start);
}

/// Replace `path` with the stroke outline a pen would paint along it.
///
/// The path is cloned and flattened (through `matrix` if given) before the
/// outline is traced, so the result contains Bezier tags only where round
/// caps introduce them. The output fill mode is forced to winding. Paths
/// with fewer than two points cannot be stroked.
pub(crate) fn widen_path(
    path: &mut Path,
    pen: &Pen,
    matrix: Option<&Matrix>,
    flatness: f64,
) -> Result<()> {
    if path.point_count() <= 1 {
        return Err(Error::OutOfMemory);
    }

    let mut flat = path.clone();
    flat.flatten(matrix, flatness)?;

    if (pen.end_cap as u32) > (LineCap::Round as u32) {
        warn!("unimplemented end cap {:?}", pen.end_cap);
    }
    if (pen.start_cap as u32) > (LineCap::Round as u32) {
        warn!("unimplemented start cap {:?}", pen.start_cap);
    }
    if pen.dash_cap != DashCap::Flat {
        warn!("unimplemented dash cap {:?}", pen.dash_cap);
    }
    if pen.join == LineJoin::Round {
        warn!("unimplemented line join {:?}", pen.join);
    }
    if pen.dash_style != DashStyle::Solid {
        warn!("unimplemented dash style {:?}", pen.dash_style);
    }
    if pen.alignment != PenAlignment::Center {
        warn!("unimplemented pen alignment {:?}", pen.alignment);
    }

    let points = flat.points();
    let types = flat.types();
    let mut out: Vec<(Point, u8)> = Vec::new();
    let mut subpath_start = 0usize;

    for i in 0..points.len() {
        let t = types[i];

        if is_start(t) {
            subpath_start = i;
        }

        if is_closed(t) {
            widen_closed_figure(points, pen, subpath_start, i, &mut out);
        } else if i == points.len() - 1 || is_start(types[i + 1]) {
            widen_open_figure(points, pen, subpath_start, i, &mut out);
        }
    }

    path.replace_with_outline(out)?;

    Ok(())
}
