//! Closed 2D outlines made of straight and curved segments.
//!
//! A [`Contour`] is built once with a [`ContourBuilder`], flattened into a point
//! loop by the extruder and then discarded. Points are in piece-local units,
//! x to the right and y up.

use cgmath::{EuclideanSpace, InnerSpace, Point2};

/// Number of straight pieces each curve is flattened into.
pub const CURVE_DIVISIONS: usize = 12;

/// Maximum gap between two points that are still considered the same point,
/// for a contour of unit size. Builders for other sizes scale it, see
/// [`ContourBuilder::with_tolerance`].
pub const CLOSE_TOLERANCE: f32 = 1e-5;

/// A single piece of a contour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContourSegment {
    Line {
        start: Point2<f32>,
        end: Point2<f32>,
    },
    QuadraticBezier {
        start: Point2<f32>,
        control: Point2<f32>,
        end: Point2<f32>,
    },
    CubicBezier {
        start: Point2<f32>,
        control1: Point2<f32>,
        control2: Point2<f32>,
        end: Point2<f32>,
    },
}

impl ContourSegment {
    pub fn start(&self) -> Point2<f32> {
        match self {
            ContourSegment::Line { start, .. }
            | ContourSegment::QuadraticBezier { start, .. }
            | ContourSegment::CubicBezier { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Point2<f32> {
        match self {
            ContourSegment::Line { end, .. }
            | ContourSegment::QuadraticBezier { end, .. }
            | ContourSegment::CubicBezier { end, .. } => *end,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, ContourSegment::Line { .. })
    }

    /// Evaluate the segment at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> Point2<f32> {
        let s = 1.0 - t;
        match *self {
            ContourSegment::Line { start, end } => start + (end - start) * t,
            ContourSegment::QuadraticBezier {
                start,
                control,
                end,
            } => Point2::from_vec(
                start.to_vec() * (s * s) + control.to_vec() * (2.0 * s * t) + end.to_vec() * (t * t),
            ),
            ContourSegment::CubicBezier {
                start,
                control1,
                control2,
                end,
            } => Point2::from_vec(
                start.to_vec() * (s * s * s)
                    + control1.to_vec() * (3.0 * s * s * t)
                    + control2.to_vec() * (3.0 * s * t * t)
                    + end.to_vec() * (t * t * t),
            ),
        }
    }

    /**
     * Points along the segment, excluding its start and including its end.
     *
     * Lines contribute only their end point, curves `divisions` evenly spaced
     * samples in parameter space.
     */
    pub fn sample(&self, divisions: usize) -> Vec<Point2<f32>> {
        if self.is_line() {
            return vec![self.end()];
        }
        let divisions = divisions.max(1);
        (1..=divisions)
            .map(|i| {
                if i == divisions {
                    // exact end keeps neighbouring segments welded
                    self.end()
                } else {
                    self.point_at(i as f32 / divisions as f32)
                }
            })
            .collect()
    }
}

/// An ordered, closed loop of segments.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    segments: Vec<ContourSegment>,
    tolerance: f32,
}

impl Contour {
    pub fn segments(&self) -> &[ContourSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Distance below which two points of this contour coincide.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn is_line_only(&self) -> bool {
        self.segments.iter().all(ContourSegment::is_line)
    }

    pub fn start(&self) -> Option<Point2<f32>> {
        self.segments.first().map(ContourSegment::start)
    }

    pub fn end(&self) -> Option<Point2<f32>> {
        self.segments.last().map(ContourSegment::end)
    }

    /// Distance between the last end point and the first start point.
    pub fn closing_gap(&self) -> f32 {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => (end - start).magnitude(),
            _ => f32::INFINITY,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closing_gap() <= self.tolerance
    }

    /**
     * Flattens the contour into a closed point loop: the first and the last point
     * are the same. Consecutive duplicates are dropped.
     */
    pub fn points(&self, divisions: usize) -> Vec<Point2<f32>> {
        let Some(start) = self.start() else {
            return Vec::new();
        };
        let mut points = vec![start];
        for segment in &self.segments {
            for point in segment.sample(divisions) {
                let duplicate = points
                    .last()
                    .is_some_and(|last| (point - *last).magnitude() <= self.tolerance);
                if !duplicate {
                    points.push(point);
                }
            }
        }
        points
    }

    /// The flattened loop without its closing point, the form triangulation and extrusion want.
    pub fn outline_points(&self, divisions: usize) -> Vec<Point2<f32>> {
        let mut points = self.points(divisions);
        if points.len() > 1 {
            let first = points[0];
            if points
                .last()
                .is_some_and(|last| (*last - first).magnitude() <= self.tolerance)
            {
                points.pop();
            }
        }
        points
    }

    /// Axis-aligned bounds `(min, max)` of the flattened contour.
    pub fn bounds(&self, divisions: usize) -> Option<(Point2<f32>, Point2<f32>)> {
        bounds_of(&self.points(divisions))
    }
}

pub(crate) fn bounds_of(points: &[Point2<f32>]) -> Option<(Point2<f32>, Point2<f32>)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(min, max), p| {
        (
            Point2::new(min.x.min(p.x), min.y.min(p.y)),
            Point2::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

/// Path-style builder: move to a start point, append segments, close.
#[derive(Clone, Debug)]
pub struct ContourBuilder {
    start: Point2<f32>,
    cursor: Point2<f32>,
    segments: Vec<ContourSegment>,
    tolerance: f32,
}

impl ContourBuilder {
    pub fn new(start: Point2<f32>) -> Self {
        Self {
            start,
            cursor: start,
            segments: Vec::new(),
            tolerance: CLOSE_TOLERANCE,
        }
    }

    /// Use `tolerance` instead of [`CLOSE_TOLERANCE`] to weld points, e.g.
    /// `CLOSE_TOLERANCE * size` for a shape scaled by `size`.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn cursor(&self) -> Point2<f32> {
        self.cursor
    }

    /// Straight segment to `end`. Moving onto the current point is a no-op.
    pub fn line_to(mut self, end: Point2<f32>) -> Self {
        if (end - self.cursor).magnitude() > self.tolerance {
            self.segments.push(ContourSegment::Line {
                start: self.cursor,
                end,
            });
            self.cursor = end;
        }
        self
    }

    pub fn quadratic_curve_to(mut self, control: Point2<f32>, end: Point2<f32>) -> Self {
        self.segments.push(ContourSegment::QuadraticBezier {
            start: self.cursor,
            control,
            end,
        });
        self.cursor = end;
        self
    }

    pub fn bezier_curve_to(
        mut self,
        control1: Point2<f32>,
        control2: Point2<f32>,
        end: Point2<f32>,
    ) -> Self {
        self.segments.push(ContourSegment::CubicBezier {
            start: self.cursor,
            control1,
            control2,
            end,
        });
        self.cursor = end;
        self
    }

    /// Finishes the loop with a straight segment back to the start if needed.
    pub fn close(self) -> Contour {
        let start = self.start;
        let closed = self.line_to(start);
        Contour {
            segments: closed.segments,
            tolerance: closed.tolerance,
        }
    }
}
