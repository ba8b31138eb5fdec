//! Path storage and the full construction, mutation, and query surface.
//!
//! A `Path` keeps two parallel arrays, one of points and one of type tags,
//! plus the fill mode and a transient new-figure flag. Builder operations
//! append tagged points; a point appended while the flag is set begins a
//! new sub-figure, otherwise it continues the current one.

use log::trace;

use crate::arc::{arc_to_poly_bezier, MAX_ARC_POINTS};
use crate::bounds::world_bounds;
use crate::error::{Error, Result};
use crate::flatten::flatten_cubic;
use crate::glyph::{ContourSegment, GlyphOutlineSource};
use crate::matrix::Matrix;
use crate::pen::Pen;
use crate::region::PathHitTester;
use crate::spline::{curve_control_points, curve_end_control, TENSION_SCALE};
use crate::types::{
    is_closed, is_start, segment_type, FillMode, Point, Rect, PATH_FLAG_CLOSE, PATH_FLAG_MARKER,
    PATH_TYPE_BEZIER, PATH_TYPE_LINE, PATH_TYPE_MASK, PATH_TYPE_START,
};
use crate::widen::widen_path;

/// A figure-structured sequence of points and type tags.
#[derive(Debug, Clone)]
pub struct Path {
    points: Vec<Point>,
    types: Vec<u8>,
    fill_mode: FillMode,
    pending_new_figure: bool,
}

impl Path {
    /// Empty path with the given fill mode.
    pub fn new(fill_mode: FillMode) -> Self {
        Self {
            points: Vec::new(),
            types: Vec::new(),
            fill_mode,
            pending_new_figure: true,
        }
    }

    /// Path over caller-supplied point and tag arrays.
    pub fn from_data(points: &[Point], types: &[u8], fill_mode: FillMode) -> Result<Self> {
        if points.len() != types.len() {
            return Err(Error::InvalidArgument);
        }
        let mut path = Self::new(fill_mode);
        path.reserve(points.len())?;
        path.points.extend_from_slice(points);
        path.types.extend_from_slice(types);
        Ok(path)
    }

    /// Grow both arrays or fail without modifying the path.
    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.points
            .try_reserve(additional)
            .and_then(|_| self.types.try_reserve(additional))
            .map_err(|_| Error::OutOfMemory)
    }

    /// Tag for the next appended point: Start when a new figure is pending,
    /// Line otherwise.
    fn start_tag(&mut self) -> u8 {
        if self.pending_new_figure {
            self.pending_new_figure = false;
            PATH_TYPE_START
        } else {
            PATH_TYPE_LINE
        }
    }

    // ---- builders ----

    /// Append a line segment from `(x1, y1)` to `(x2, y2)`.
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        trace!("add_line({x1:.2}, {y1:.2}, {x2:.2}, {y2:.2})");

        self.reserve(2)?;
        let tag = self.start_tag();
        self.points.push(Point::new(x1, y1));
        self.types.push(tag);
        self.points.push(Point::new(x2, y2));
        self.types.push(PATH_TYPE_LINE);
        Ok(())
    }

    /// Append a polyline through `points`.
    pub fn add_lines(&mut self, points: &[Point]) -> Result<()> {
        trace!("add_lines({} points)", points.len());

        if points.is_empty() {
            return Err(Error::InvalidArgument);
        }
        self.reserve(points.len())?;
        let old_count = self.points.len();
        for p in points {
            self.points.push(*p);
            self.types.push(PATH_TYPE_LINE);
        }
        if self.pending_new_figure {
            self.types[old_count] = PATH_TYPE_START;
            self.pending_new_figure = false;
        }
        Ok(())
    }

    /// Append one cubic Bezier segment.
    #[allow(clippy::too_many_arguments)]
    pub fn add_bezier(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        x4: f64,
        y4: f64,
    ) -> Result<()> {
        trace!("add_bezier(({x1:.2}, {y1:.2}) .. ({x4:.2}, {y4:.2}))");

        self.reserve(4)?;
        let tag = self.start_tag();
        self.points.push(Point::new(x1, y1));
        self.types.push(tag);
        for p in [
            Point::new(x2, y2),
            Point::new(x3, y3),
            Point::new(x4, y4),
        ] {
            self.points.push(p);
            self.types.push(PATH_TYPE_BEZIER);
        }
        Ok(())
    }

    /// Append a run of cubic Beziers: an anchor plus three points per curve.
    pub fn add_beziers(&mut self, points: &[Point]) -> Result<()> {
        trace!("add_beziers({} points)", points.len());

        if points.is_empty() || (points.len() - 1) % 3 != 0 {
            return Err(Error::InvalidArgument);
        }
        self.reserve(points.len())?;
        let old_count = self.points.len();
        for p in points {
            self.points.push(*p);
            self.types.push(PATH_TYPE_BEZIER);
        }
        self.types[old_count] = self.start_tag();
        Ok(())
    }

    /// Append an elliptical arc as cubic Beziers. A zero sweep appends
    /// nothing.
    pub fn add_arc(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Result<()> {
        trace!("add_arc({x:.2}, {y:.2}, {width:.2}, {height:.2}, {start_angle:.2}, {sweep_angle:.2})");

        let pts = arc_to_poly_bezier(x, y, width, height, start_angle, sweep_angle);
        if pts.is_empty() {
            return Ok(());
        }
        self.reserve(pts.len())?;
        let old_count = self.points.len();
        for p in &pts {
            self.points.push(*p);
            self.types.push(PATH_TYPE_BEZIER);
        }
        self.types[old_count] = self.start_tag();
        Ok(())
    }

    /// Append a full ellipse as its own closed figure.
    pub fn add_ellipse(&mut self, rect: Rect) -> Result<()> {
        trace!("add_ellipse({rect:?})");

        let pts = arc_to_poly_bezier(rect.x, rect.y, rect.width, rect.height, 0.0, 360.0);
        if pts.len() != MAX_ARC_POINTS {
            return Err(Error::Internal("unexpected ellipse point count"));
        }
        self.reserve(pts.len())?;
        let old_count = self.points.len();
        for p in &pts {
            self.points.push(*p);
            self.types.push(PATH_TYPE_BEZIER);
        }
        self.types[old_count] = PATH_TYPE_START;
        self.types[old_count + MAX_ARC_POINTS - 1] |= PATH_FLAG_CLOSE;
        self.pending_new_figure = true;
        Ok(())
    }

    /// Append a pie slice: a spoke from the ellipse center to the arc start,
    /// the arc, and a closing edge back to the center.
    pub fn add_pie(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Result<()> {
        trace!("add_pie({x:.2}, {y:.2}, {width:.2}, {height:.2}, {start_angle:.2}, {sweep_angle:.2})");

        if width <= 1e-7 || height <= 1e-7 {
            return Err(Error::InvalidArgument);
        }

        let pts = arc_to_poly_bezier(x, y, width, height, start_angle, sweep_angle);
        if pts.is_empty() {
            return Ok(());
        }

        let backup = self.clone();
        let result = (|| {
            self.add_line(x + width / 2.0, y + height / 2.0, pts[0].x, pts[0].y)?;
            // the arc's first point is already in place as the line endpoint
            self.reserve(pts.len() - 1)?;
            for p in &pts[1..] {
                self.points.push(*p);
                self.types.push(PATH_TYPE_BEZIER);
            }
            self.close_figure();
            Ok(())
        })();
        if result.is_err() {
            *self = backup;
        }
        result
    }

    /// Append a rectangle as its own closed figure.
    pub fn add_rectangle(&mut self, rect: Rect) -> Result<()> {
        trace!("add_rectangle({rect:?})");

        let backup = self.clone();
        let result = (|| {
            self.pending_new_figure = true;
            self.add_line(rect.x, rect.y, rect.x + rect.width, rect.y)?;
            self.add_lines(&[
                Point::new(rect.x + rect.width, rect.y + rect.height),
                Point::new(rect.x, rect.y + rect.height),
            ])?;
            self.close_figure();
            Ok(())
        })();
        if result.is_err() {
            *self = backup;
        }
        result
    }

    /// Append several rectangles; on failure the path is left unchanged.
    pub fn add_rectangles(&mut self, rects: &[Rect]) -> Result<()> {
        trace!("add_rectangles({} rects)", rects.len());

        if rects.is_empty() {
            return Err(Error::InvalidArgument);
        }
        let backup = self.clone();
        for rect in rects {
            if let Err(e) = self.add_rectangle(*rect) {
                *self = backup;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Append a closed polygon over at least three points.
    pub fn add_polygon(&mut self, points: &[Point]) -> Result<()> {
        trace!("add_polygon({} points)", points.len());

        if points.len() < 3 {
            return Err(Error::InvalidArgument);
        }
        self.reserve(points.len())?;
        let old_count = self.points.len();
        for p in points {
            self.points.push(*p);
            self.types.push(PATH_TYPE_LINE);
        }
        self.types[old_count] = PATH_TYPE_START;
        self.types[old_count + points.len() - 1] |= PATH_FLAG_CLOSE;
        self.pending_new_figure = true;
        Ok(())
    }

    /// Append a cardinal spline through `points` with the default tension.
    pub fn add_curve(&mut self, points: &[Point]) -> Result<()> {
        self.add_curve_tension(points, 1.0)
    }

    /// Append a cardinal spline through `points`.
    pub fn add_curve_tension(&mut self, points: &[Point], tension: f64) -> Result<()> {
        trace!("add_curve_tension({} points, {tension:.2})", points.len());

        let count = points.len();
        if count <= 1 {
            return Err(Error::InvalidArgument);
        }

        let coef = tension * TENSION_SCALE;
        let len_pt = count * 3 - 2;
        let mut pt = vec![Point::default(); len_pt];

        pt[0] = points[0];
        pt[1] = curve_end_control(points[0], points[1], coef);

        for i in 0..count - 2 {
            let (before, after) =
                curve_control_points(points[i], points[i + 1], points[i + 2], coef);
            pt[3 * i + 2] = before;
            pt[3 * i + 3] = points[i + 1];
            pt[3 * i + 4] = after;
        }

        pt[len_pt - 2] = curve_end_control(points[count - 1], points[count - 2], coef);
        pt[len_pt - 1] = points[count - 1];

        self.add_beziers(&pt)
    }

    /// Append `nseg` spline segments starting at `offset` into `points`.
    pub fn add_curve_segment(
        &mut self,
        points: &[Point],
        offset: usize,
        nseg: usize,
        tension: f64,
    ) -> Result<()> {
        if offset + 1 >= points.len() || points.len() - offset < nseg + 1 {
            return Err(Error::InvalidArgument);
        }
        self.add_curve_tension(&points[offset..offset + nseg + 1], tension)
    }

    /// Append a closed cardinal spline with the default tension.
    pub fn add_closed_curve(&mut self, points: &[Point]) -> Result<()> {
        self.add_closed_curve_tension(points, 1.0)
    }

    /// Append a cardinal spline that wraps from the last point back to the
    /// first and closes the figure.
    pub fn add_closed_curve_tension(&mut self, points: &[Point], tension: f64) -> Result<()> {
        trace!(
            "add_closed_curve_tension({} points, {tension:.2})",
            points.len()
        );

        let count = points.len();
        if count <= 1 {
            return Err(Error::InvalidArgument);
        }

        let coef = tension * TENSION_SCALE;
        let len_pt = (count + 1) * 3 - 2;
        let mut pt = vec![Point::default(); len_pt];

        // extended copy wrapping the first point
        for i in 0..count - 1 {
            let next = points[(i + 2) % count];
            let (before, after) = curve_control_points(points[i], points[i + 1], next, coef);
            pt[3 * i + 2] = before;
            pt[3 * i + 3] = points[i + 1];
            pt[3 * i + 4] = after;
        }

        // the controls around the shared start/end point come from the
        // wrapped triple (last, first, second)
        let (before, after) =
            curve_control_points(points[count - 1], points[0], points[1], coef);
        pt[len_pt - 2] = before;
        pt[0] = points[0];
        pt[1] = after;
        pt[len_pt - 1] = pt[0];

        self.add_beziers(&pt)?;
        if let Some(last) = self.types.last_mut() {
            *last |= PATH_FLAG_CLOSE;
        }
        self.pending_new_figure = true;
        Ok(())
    }

    /// Append all figures of another path. With `connect`, the first copied
    /// point continues the current figure instead of starting a new one.
    pub fn add_path(&mut self, other: &Path, connect: bool) -> Result<()> {
        trace!("add_path({} points, connect={connect})", other.points.len());

        if other.points.is_empty() {
            return Ok(());
        }
        self.reserve(other.points.len())?;
        let old_count = self.points.len();
        self.points.extend_from_slice(&other.points);
        self.types.extend_from_slice(&other.types);

        self.types[old_count] = if self.pending_new_figure || !connect {
            PATH_TYPE_START
        } else {
            PATH_TYPE_LINE
        };
        self.pending_new_figure = false;
        Ok(())
    }

    /// Append glyph outlines, one closed figure per contour. On any error
    /// the path is restored to its previous state.
    pub fn add_glyph_outlines(&mut self, source: &mut dyn GlyphOutlineSource) -> Result<()> {
        trace!("add_glyph_outlines");

        let backup = self.clone();
        let result = (|| {
            while let Some(contours) = source.next_glyph()? {
                for contour in &contours {
                    contour.validate()?;
                    self.start_figure();
                    self.reserve(1)?;
                    let tag = self.start_tag();
                    self.points.push(contour.start);
                    self.types.push(tag);
                    for segment in &contour.segments {
                        match segment {
                            ContourSegment::Lines(pts) => {
                                self.reserve(pts.len())?;
                                for p in pts {
                                    self.points.push(*p);
                                    self.types.push(PATH_TYPE_LINE);
                                }
                            }
                            ContourSegment::Beziers(pts) => {
                                self.reserve(pts.len())?;
                                for p in pts {
                                    self.points.push(*p);
                                    self.types.push(PATH_TYPE_BEZIER);
                                }
                            }
                        }
                    }
                    self.close_figure();
                }
            }
            Ok(())
        })();
        if result.is_err() {
            *self = backup;
        }
        result
    }

    // ---- mutators ----

    /// Close the current figure; the next appended point starts a new one.
    pub fn close_figure(&mut self) {
        trace!("close_figure");

        if let Some(last) = self.types.last_mut() {
            *last |= PATH_FLAG_CLOSE;
            self.pending_new_figure = true;
        }
    }

    /// Close every figure that is followed by another one. The trailing
    /// figure is left open.
    pub fn close_all_figures(&mut self) {
        trace!("close_all_figures");

        for i in 1..self.types.len() {
            if self.types[i] == PATH_TYPE_START {
                self.types[i - 1] |= PATH_FLAG_CLOSE;
            }
        }
        self.pending_new_figure = true;
    }

    /// Start a new figure without closing the current one.
    pub fn start_figure(&mut self) {
        self.pending_new_figure = true;
    }

    /// Remove all points and restore the initial state.
    pub fn reset(&mut self) {
        trace!("reset");

        self.points.clear();
        self.types.clear();
        self.fill_mode = FillMode::Alternate;
        self.pending_new_figure = true;
    }

    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.fill_mode = fill_mode;
    }

    /// Set the marker flag on the last point.
    pub fn set_marker(&mut self) {
        if let Some(last) = self.types.last_mut() {
            *last |= PATH_FLAG_MARKER;
        }
    }

    /// Clear every marker flag except the last point's.
    pub fn clear_markers(&mut self) {
        let count = self.types.len();
        for t in &mut self.types[..count.saturating_sub(1)] {
            *t &= !PATH_FLAG_MARKER;
        }
    }

    /// Reverse the point order of every figure in place.
    pub fn reverse(&mut self) {
        trace!("reverse");

        let count = self.points.len();
        if count == 0 {
            return;
        }

        let mut rev_points = vec![Point::default(); count];
        let mut rev_types = vec![0u8; count];
        let mut start = 0usize;

        for i in 0..count {
            if !is_start(self.types[count - i - 1]) {
                continue;
            }
            for j in start..=i {
                rev_points[j] = self.points[count - j - 1];
                rev_types[j] = self.types[count - j - 1];
            }
            rev_types[start] = PATH_TYPE_START;
            // the reversed figure ends with the flags of the original end
            // point and the segment type of its second point
            if i - start > 1 {
                rev_types[i] = self.types[count - start - 1] & !PATH_TYPE_MASK;
                rev_types[i] |= rev_types[i - 1];
            } else {
                rev_types[i] = self.types[start];
            }
            start = i + 1;
        }

        self.points = rev_points;
        self.types = rev_types;
    }

    /// Apply an affine transform to every point.
    pub fn transform(&mut self, matrix: &Matrix) {
        trace!("transform");

        matrix.transform_points(&mut self.points);
    }

    /// Replace every Bezier run with line segments within `flatness` of the
    /// curve, optionally transforming first.
    pub fn flatten(&mut self, matrix: Option<&Matrix>, flatness: f64) -> Result<()> {
        trace!("flatten({flatness:.2})");

        if self.points.is_empty() {
            return Ok(());
        }

        if let Some(m) = matrix {
            self.transform(m);
        }

        let mut out: Vec<(Point, u8)> = Vec::new();
        out.try_reserve(self.points.len())
            .map_err(|_| Error::OutOfMemory)?;
        out.push((self.points[0], self.types[0]));

        let mut startidx = 0usize;
        let mut i = 1usize;
        while i < self.points.len() {
            let t = segment_type(self.types[i]);

            if t == PATH_TYPE_START {
                startidx = i;
            }

            if t == PATH_TYPE_START || t == PATH_TYPE_LINE {
                out.push((self.points[i], self.types[i]));
                i += 1;
                continue;
            }

            // Bezier run: two control points, then the endpoint. A run whose
            // second control carries the close flag wraps back to the
            // figure's start point instead of a stored endpoint.
            if i + 1 >= self.points.len() {
                return Err(Error::InvalidArgument);
            }
            let c1 = self.points[i];
            let c2 = self.points[i + 1];
            let (end, end_type_src) = if is_closed(self.types[i + 1]) {
                let r = (self.points[startidx], self.types[i + 1]);
                i += 2;
                r
            } else {
                if i + 2 >= self.points.len() {
                    return Err(Error::InvalidArgument);
                }
                i += 2;
                let r = (self.points[i], self.types[i]);
                i += 1;
                r
            };
            let end_type = (end_type_src & !PATH_TYPE_MASK) | PATH_TYPE_LINE;

            let p0 = match out.last() {
                Some(&(p, _)) => p,
                None => return Err(Error::Internal("flatten lost the figure start")),
            };
            flatten_cubic(&mut out, p0, c1, c2, end, end_type, flatness);
        }

        self.replace_points(out)?;
        Ok(())
    }

    /// Replace the path with the outline a pen would paint along it.
    pub fn widen(&mut self, pen: &Pen, matrix: Option<&Matrix>, flatness: f64) -> Result<()> {
        trace!("widen(width={:.2}, {flatness:.2})", pen.width);

        widen_path(self, pen, matrix, flatness)
    }

    /// Swap in new point data, keeping fill mode and figure state.
    fn replace_points(&mut self, data: Vec<(Point, u8)>) -> Result<()> {
        let mut points = Vec::new();
        let mut types = Vec::new();
        points.try_reserve(data.len()).map_err(|_| Error::OutOfMemory)?;
        types.try_reserve(data.len()).map_err(|_| Error::OutOfMemory)?;
        for (p, t) in data {
            points.push(p);
            types.push(t);
        }
        self.points = points;
        self.types = types;
        Ok(())
    }

    /// Swap in a stroke outline; the filled result uses the winding rule.
    pub(crate) fn replace_with_outline(&mut self, outline: Vec<(Point, u8)>) -> Result<()> {
        self.replace_points(outline)?;
        self.fill_mode = FillMode::Winding;
        Ok(())
    }

    // ---- queries ----

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn types(&self) -> &[u8] {
        &self.types
    }

    /// Copy all points into a caller buffer.
    pub fn copy_points(&self, out: &mut [Point]) -> Result<()> {
        if out.len() < self.points.len() {
            return Err(Error::InsufficientBuffer);
        }
        out[..self.points.len()].copy_from_slice(&self.points);
        Ok(())
    }

    /// Copy all type tags into a caller buffer.
    pub fn copy_types(&self, out: &mut [u8]) -> Result<()> {
        if out.len() < self.types.len() {
            return Err(Error::InsufficientBuffer);
        }
        out[..self.types.len()].copy_from_slice(&self.types);
        Ok(())
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    /// Bounding box of the stored points, optionally transformed and
    /// inflated for a pen.
    pub fn bounds(&self, matrix: Option<&Matrix>, pen: Option<&Pen>) -> Rect {
        world_bounds(self, matrix, pen)
    }

    /// Whether `(x, y)` lies inside the filled area, as decided by the
    /// region collaborator.
    pub fn is_visible(&self, x: f64, y: f64, tester: &mut dyn PathHitTester) -> Result<bool> {
        tester.hit_test(self, x, y)
    }

    /// Whether `(x, y)` lies on the stroked outline.
    pub fn is_outline_visible(&self, _x: f64, _y: f64, _pen: &Pen) -> Result<bool> {
        Err(Error::NotImplemented)
    }

    /// Warp the path through a parallelogram-to-rectangle mapping.
    pub fn warp(
        &mut self,
        _matrix: Option<&Matrix>,
        _points: &[Point],
        _rect: Rect,
        _flatness: f64,
    ) -> Result<()> {
        Err(Error::NotImplemented)
    }

    /// Reduce the path to the outline of its filled area.
    pub fn outline(&mut self, _matrix: Option<&Matrix>, _flatness: f64) -> Result<()> {
        Err(Error::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::DEFAULT_FLATNESS;
    use crate::types::{has_marker, is_bezier, is_line};

    #[test]
    fn test_line_starts_figure() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_line(0.0, 0.0, 10.0, 0.0).unwrap();
        assert_eq!(path.types(), &[PATH_TYPE_START, PATH_TYPE_LINE]);

        // a second line continues the figure
        path.add_line(10.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!(
            path.types(),
            &[PATH_TYPE_START, PATH_TYPE_LINE, PATH_TYPE_LINE, PATH_TYPE_LINE]
        );
    }

    #[test]
    fn test_rectangle_tags() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(path.point_count(), 4);
        assert_eq!(
            path.types(),
            &[
                PATH_TYPE_START,
                PATH_TYPE_LINE,
                PATH_TYPE_LINE,
                PATH_TYPE_LINE | PATH_FLAG_CLOSE
            ]
        );
        let p = path.points();
        assert_eq!(p[0], Point::new(0.0, 0.0));
        assert_eq!(p[1], Point::new(10.0, 0.0));
        assert_eq!(p[2], Point::new(10.0, 10.0));
        assert_eq!(p[3], Point::new(0.0, 10.0));
    }

    #[test]
    fn test_line_then_polyline_then_close() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_line(0.0, 0.0, 10.0, 0.0).unwrap();
        path.add_lines(&[Point::new(10.0, 10.0), Point::new(0.0, 10.0)])
            .unwrap();
        path.close_figure();

        assert_eq!(
            path.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0)
            ]
        );
        assert_eq!(
            path.types(),
            &[
                PATH_TYPE_START,
                PATH_TYPE_LINE,
                PATH_TYPE_LINE,
                PATH_TYPE_LINE | PATH_FLAG_CLOSE
            ]
        );
    }

    #[test]
    fn test_close_then_append_starts_new_figure() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_line(0.0, 0.0, 10.0, 0.0).unwrap();
        path.close_figure();
        path.add_line(20.0, 0.0, 30.0, 0.0).unwrap();
        assert!(is_start(path.types()[2]));
    }

    #[test]
    fn test_close_figure_on_empty_path_is_noop() {
        let mut path = Path::new(FillMode::Alternate);
        path.close_figure();
        assert_eq!(path.point_count(), 0);
    }

    #[test]
    fn test_close_all_figures() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_line(0.0, 0.0, 10.0, 0.0).unwrap();
        path.start_figure();
        path.add_line(20.0, 0.0, 30.0, 0.0).unwrap();
        path.close_all_figures();
        assert!(is_closed(path.types()[1]));
        // the trailing figure stays open
        assert!(!is_closed(path.types()[3]));

        // but the next appended point starts a new figure
        path.add_line(40.0, 0.0, 50.0, 0.0).unwrap();
        assert!(is_start(path.types()[4]));
    }

    #[test]
    fn test_add_beziers_count_rule() {
        let mut path = Path::new(FillMode::Alternate);
        let three = [Point::default(); 3];
        assert_eq!(path.add_beziers(&three), Err(Error::InvalidArgument));
        assert_eq!(path.add_beziers(&[]), Err(Error::InvalidArgument));

        let four = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(3.0, 0.0),
        ];
        path.add_beziers(&four).unwrap();
        assert!(is_start(path.types()[0]));
        assert!(is_bezier(path.types()[1]));
        assert!(is_bezier(path.types()[3]));
    }

    #[test]
    fn test_ellipse_is_closed_intrinsic_figure() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_ellipse(Rect::new(0.0, 0.0, 100.0, 50.0)).unwrap();
        assert_eq!(path.point_count(), 13);
        assert!(is_start(path.types()[0]));
        assert!(is_closed(path.types()[12]));

        // the next figure starts fresh
        path.add_line(0.0, 0.0, 1.0, 1.0).unwrap();
        assert!(is_start(path.types()[13]));
    }

    #[test]
    fn test_polygon() {
        let mut path = Path::new(FillMode::Alternate);
        let two = [Point::default(); 2];
        assert_eq!(path.add_polygon(&two), Err(Error::InvalidArgument));

        let tri = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        path.add_polygon(&tri).unwrap();
        assert!(is_start(path.types()[0]));
        assert!(is_line(path.types()[1]));
        assert!(is_closed(path.types()[2]));
    }

    #[test]
    fn test_pie_degenerate_rect() {
        let mut path = Path::new(FillMode::Alternate);
        assert_eq!(
            path.add_pie(0.0, 0.0, 0.0, 10.0, 0.0, 90.0),
            Err(Error::InvalidArgument)
        );
        assert_eq!(path.point_count(), 0);
    }

    #[test]
    fn test_pie_shape() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_pie(0.0, 0.0, 100.0, 100.0, 0.0, 90.0).unwrap();
        // center spoke start, arc start, 3 bezier points, closed
        assert_eq!(path.point_count(), 5);
        assert_eq!(path.points()[0], Point::new(50.0, 50.0));
        assert!(is_start(path.types()[0]));
        assert!(is_closed(path.types()[4]));
        // zero sweep appends nothing
        let before = path.point_count();
        path.add_pie(0.0, 0.0, 100.0, 100.0, 0.0, 0.0).unwrap();
        assert_eq!(path.point_count(), before);
    }

    #[test]
    fn test_curve_point_count() {
        let mut path = Path::new(FillMode::Alternate);
        let one = [Point::default()];
        assert_eq!(path.add_curve(&one), Err(Error::InvalidArgument));

        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
        ];
        path.add_curve(&pts).unwrap();
        // 3 input points produce 3*3-2 = 7 path points
        assert_eq!(path.point_count(), 7);
        assert!(is_start(path.types()[0]));
        assert_eq!(path.points()[3], pts[1]);
        assert_eq!(path.points()[6], pts[2]);
    }

    #[test]
    fn test_curve_segment_bounds_checks() {
        let mut path = Path::new(FillMode::Alternate);
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 10.0),
        ];
        assert_eq!(
            path.add_curve_segment(&pts, 3, 1, 1.0),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            path.add_curve_segment(&pts, 1, 3, 1.0),
            Err(Error::InvalidArgument)
        );
        path.add_curve_segment(&pts, 1, 2, 1.0).unwrap();
        assert_eq!(path.point_count(), 7);
        assert_eq!(path.points()[0], pts[1]);
    }

    #[test]
    fn test_closed_curve() {
        let mut path = Path::new(FillMode::Alternate);
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        path.add_closed_curve(&pts).unwrap();
        // 3 input points produce (3+1)*3-2 = 10 path points
        assert_eq!(path.point_count(), 10);
        assert!(is_start(path.types()[0]));
        assert!(is_closed(path.types()[9]));
        // duplicated endpoint closes onto the start
        assert_eq!(path.points()[9], path.points()[0]);
    }

    #[test]
    fn test_add_path_connect() {
        let mut a = Path::new(FillMode::Alternate);
        a.add_line(0.0, 0.0, 10.0, 0.0).unwrap();

        let mut b = Path::new(FillMode::Alternate);
        b.add_line(20.0, 0.0, 30.0, 0.0).unwrap();

        let mut connected = a.clone();
        connected.add_path(&b, true).unwrap();
        assert!(is_line(connected.types()[2]));

        let mut detached = a.clone();
        detached.add_path(&b, false).unwrap();
        assert!(is_start(detached.types()[2]));

        // connecting to an empty path still starts a figure
        let mut empty = Path::new(FillMode::Alternate);
        empty.add_path(&b, true).unwrap();
        assert!(is_start(empty.types()[0]));
    }

    #[test]
    fn test_markers() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_line(0.0, 0.0, 10.0, 0.0).unwrap();
        path.set_marker();
        path.add_line(10.0, 0.0, 20.0, 0.0).unwrap();
        path.set_marker();
        assert!(has_marker(path.types()[1]));
        assert!(has_marker(path.types()[3]));

        // the last point's marker survives clearing
        path.clear_markers();
        assert!(!has_marker(path.types()[1]));
        assert!(has_marker(path.types()[3]));
    }

    #[test]
    fn test_reset() {
        let mut path = Path::new(FillMode::Winding);
        path.add_line(0.0, 0.0, 10.0, 0.0).unwrap();
        path.reset();
        assert_eq!(path.point_count(), 0);
        assert_eq!(path.fill_mode(), FillMode::Alternate);
        path.add_line(0.0, 0.0, 1.0, 1.0).unwrap();
        assert!(is_start(path.types()[0]));
    }

    #[test]
    fn test_reverse_open_figure() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_lines(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 5.0),
        ])
        .unwrap();
        path.reverse();
        assert_eq!(path.points()[0], Point::new(20.0, 5.0));
        assert_eq!(path.points()[2], Point::new(0.0, 0.0));
        assert!(is_start(path.types()[0]));
        assert!(is_line(path.types()[2]));
    }

    #[test]
    fn test_reverse_keeps_close_flag() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_polygon(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ])
        .unwrap();
        path.reverse();
        assert!(is_start(path.types()[0]));
        assert!(is_closed(path.types()[2]));
    }

    #[test]
    fn test_reverse_involution() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        path.add_polygon(&[
            Point::new(20.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(25.0, 5.0),
        ])
        .unwrap();

        let original = path.clone();
        path.reverse();
        path.reverse();
        assert_eq!(path.points(), original.points());
        assert_eq!(path.types(), original.types());
    }

    #[test]
    fn test_transform() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_line(1.0, 2.0, 3.0, 4.0).unwrap();
        path.transform(&Matrix::translation(10.0, 20.0));
        assert_eq!(path.points()[0], Point::new(11.0, 22.0));
        assert_eq!(path.points()[1], Point::new(13.0, 24.0));
    }

    #[test]
    fn test_flatten_lines_unchanged() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        let original = path.clone();
        path.flatten(None, DEFAULT_FLATNESS).unwrap();
        assert_eq!(path.points(), original.points());
        assert_eq!(path.types(), original.types());
    }

    #[test]
    fn test_flatten_replaces_beziers() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_bezier(0.0, 0.0, 0.0, 50.0, 50.0, 50.0, 50.0, 0.0)
            .unwrap();
        path.flatten(None, DEFAULT_FLATNESS).unwrap();
        assert!(path.point_count() > 2);
        assert!(is_start(path.types()[0]));
        for &t in &path.types()[1..] {
            assert!(is_line(t));
        }
        // endpoints survive
        assert_eq!(path.points()[0], Point::new(0.0, 0.0));
        let last = path.last_point().unwrap();
        assert!((last.x - 50.0).abs() < 1e-9);
        assert!(last.y.abs() < 1e-9);
    }

    #[test]
    fn test_flatten_closed_bezier_ends_at_figure_start() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_ellipse(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
        path.flatten(None, DEFAULT_FLATNESS).unwrap();

        let last_idx = path.point_count() - 1;
        assert!(is_closed(path.types()[last_idx]));
        let first = path.points()[0];
        let last = path.points()[last_idx];
        assert!((first.x - last.x).abs() < 1e-9);
        assert!((first.y - last.y).abs() < 1e-9);
    }

    #[test]
    fn test_flatten_applies_matrix() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_line(0.0, 0.0, 10.0, 0.0).unwrap();
        path.flatten(Some(&Matrix::scaling(2.0, 2.0)), DEFAULT_FLATNESS)
            .unwrap();
        assert_eq!(path.points()[1], Point::new(20.0, 0.0));
    }

    #[test]
    fn test_copy_buffers() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_line(0.0, 0.0, 10.0, 0.0).unwrap();

        let mut small = [Point::default(); 1];
        assert_eq!(path.copy_points(&mut small), Err(Error::InsufficientBuffer));

        let mut pts = [Point::default(); 2];
        let mut tags = [0u8; 2];
        path.copy_points(&mut pts).unwrap();
        path.copy_types(&mut tags).unwrap();
        assert_eq!(pts[1], Point::new(10.0, 0.0));
        assert_eq!(tags[0], PATH_TYPE_START);
    }

    #[test]
    fn test_last_point() {
        let mut path = Path::new(FillMode::Alternate);
        assert_eq!(path.last_point(), None);
        path.add_line(0.0, 0.0, 10.0, 5.0).unwrap();
        assert_eq!(path.last_point(), Some(Point::new(10.0, 5.0)));
    }

    #[test]
    fn test_from_data_length_mismatch() {
        let pts = [Point::default(); 2];
        let tags = [PATH_TYPE_START];
        assert!(Path::from_data(&pts, &tags, FillMode::Alternate).is_err());
    }

    #[test]
    fn test_stubs_not_implemented() {
        let mut path = Path::new(FillMode::Alternate);
        path.add_line(0.0, 0.0, 10.0, 0.0).unwrap();
        assert_eq!(
            path.is_outline_visible(5.0, 0.0, &Pen::new(1.0)),
            Err(Error::NotImplemented)
        );
        assert_eq!(
            path.outline(None, DEFAULT_FLATNESS),
            Err(Error::NotImplemented)
        );
        assert_eq!(
            path.warp(None, &[], Rect::default(), DEFAULT_FLATNESS),
            Err(Error::NotImplemented)
        );
    }

    #[test]
    fn test_glyph_outline_append_and_restore() {
        use crate::glyph::GlyphContour;

        struct Stub {
            glyphs: Vec<Vec<GlyphContour>>,
            fail_after: Option<usize>,
            served: usize,
        }

        impl GlyphOutlineSource for Stub {
            fn next_glyph(&mut self) -> Result<Option<Vec<GlyphContour>>> {
                if Some(self.served) == self.fail_after {
                    return Err(Error::Internal("font backend failure"));
                }
                let g = self.glyphs.get(self.served).cloned();
                self.served += 1;
                Ok(g)
            }
        }

        let contour = GlyphContour {
            start: Point::new(0.0, 0.0),
            segments: vec![ContourSegment::Lines(vec![
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ])],
        };

        let mut path = Path::new(FillMode::Alternate);
        let mut source = Stub {
            glyphs: vec![vec![contour.clone()], vec![contour.clone()]],
            fail_after: None,
            served: 0,
        };
        path.add_glyph_outlines(&mut source).unwrap();
        assert_eq!(path.point_count(), 6);
        assert!(is_start(path.types()[0]));
        assert!(is_closed(path.types()[2]));
        assert!(is_start(path.types()[3]));
        assert!(is_closed(path.types()[5]));

        // a failing source leaves the path untouched
        let mut path2 = Path::new(FillMode::Alternate);
        path2.add_line(0.0, 0.0, 1.0, 1.0).unwrap();
        let before = path2.clone();
        let mut failing = Stub {
            glyphs: vec![vec![contour.clone()], vec![contour]],
            fail_after: Some(1),
            served: 0,
        };
        assert!(path2.add_glyph_outlines(&mut failing).is_err());
        assert_eq!(path2.points(), before.points());
        assert_eq!(path2.types(), before.types());
    }

    #[test]
    fn test_is_visible_delegates() {
        struct EvenOdd;
        impl PathHitTester for EvenOdd {
            fn hit_test(&mut self, path: &Path, x: f64, y: f64) -> Result<bool> {
                let b = path.bounds(None, None);
                Ok(x >= b.x && x <= b.x + b.width && y >= b.y && y <= b.y + b.height)
            }
        }

        let mut path = Path::new(FillMode::Alternate);
        path.add_rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        let mut tester = EvenOdd;
        assert!(path.is_visible(5.0, 5.0, &mut tester).unwrap());
        assert!(!path.is_visible(50.0, 5.0, &mut tester).unwrap());
    }
}
