//! Directed line segments and the line algebra used for mitering.
//!
//! A [`Line`] is an ordered pair of points. Direction matters: the offset
//! normal is derived from it, and a line never equals its reverse.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};
use crate::point::{Point, offset_point};

/// Relative tolerance below which two directions count as parallel.
const PARALLEL_TOLERANCE: f64 = 1e-12;

/// A directed segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    start: Point,
    end: Point,
}

/// One end of a [`Line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineEnd {
    /// The start point.
    Start,
    /// The end point.
    End,
}

impl Line {
    /// Create a line from `start` to `end`.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line whose lower-y endpoint comes first.
    ///
    /// Ties keep the given order.
    #[must_use]
    pub fn upward(a: Point, b: Point) -> Self {
        if b.y() < a.y() { Self::new(b, a) } else { Self::new(a, b) }
    }

    /// Start point.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// End point.
    #[must_use]
    pub const fn end(&self) -> Point {
        self.end
    }

    /// Both endpoints, start first.
    #[must_use]
    pub const fn points(&self) -> [Point; 2] {
        [self.start, self.end]
    }

    /// The endpoint at `at`.
    #[must_use]
    pub const fn point_at(&self, at: LineEnd) -> Point {
        match at {
            LineEnd::Start => self.start,
            LineEnd::End => self.end,
        }
    }

    /// The same segment traversed the other way.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Displacement from start to end.
    #[must_use]
    pub fn vector(&self) -> Vector2<f64> {
        self.start.vector_to(&self.end)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Signed heading in radians, in `(-π, π]`.
    #[must_use]
    pub fn direction(&self) -> f64 {
        let v = self.vector();
        v.y.atan2(v.x)
    }

    /// Heading in degrees, normalized to `[0, 360)`.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        let direction = self.direction();
        let direction = if direction < 0.0 {
            direction + 2.0 * PI
        } else {
            direction
        };
        direction.to_degrees()
    }

    /// X coordinates of start and end.
    #[must_use]
    pub fn xs(&self) -> [f64; 2] {
        [self.start.x(), self.end.x()]
    }

    /// Y coordinates of start and end.
    #[must_use]
    pub fn ys(&self) -> [f64; 2] {
        [self.start.y(), self.end.y()]
    }

    /// Returns true if `point` is the start or the end of this line.
    #[must_use]
    pub fn has_endpoint(&self, point: &Point) -> bool {
        self.start == *point || self.end == *point
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Length of `line`.
#[must_use]
pub fn line_length(line: &Line) -> f64 {
    line.length()
}

/// Signed heading of `line` in radians, via `atan2(dy, dx)`.
#[must_use]
pub fn line_direction(line: &Line) -> f64 {
    line.direction()
}

/// Heading of `line` in degrees, in `[0, 360)`.
#[must_use]
pub fn line_degrees(line: &Line) -> f64 {
    line.degrees()
}

/// Intersect two lines, treating both as infinite.
///
/// Uses the perpendicular-dot parametric form: with `da` and `db` the line
/// directions and `dp = a.start - b.start`, the intersection is
/// `b.start + db * (perp(da)·dp / perp(da)·db)`.
///
/// # Errors
///
/// Returns [`LatticeError::ParallelLines`] if the lines are parallel or
/// either one has zero length.
///
/// # Example
///
/// ```
/// use channel_lattice::{intersection, Line, Point};
///
/// let a = Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
/// let b = Line::new(Point::new(0.0, -1.0), Point::new(0.0, 1.0));
/// assert_eq!(intersection(&a, &b).unwrap(), Point::origin());
/// ```
pub fn intersection(first: &Line, second: &Line) -> LatticeResult<Point> {
    let da = first.vector();
    let db = second.vector();
    let dp = second.start.vector_to(&first.start);
    let dap = Vector2::new(-da.y, da.x);

    let denom = dap.dot(&db);
    if denom.abs() <= da.norm() * db.norm() * PARALLEL_TOLERANCE {
        return Err(LatticeError::ParallelLines {
            first: *first,
            second: *second,
        });
    }

    let t = dap.dot(&dp) / denom;
    Ok(second.start.translated(db * t))
}

/// Translate a line sideways by `offset` along its normal.
///
/// The normal is the heading rotated by +90° for non-negative headings and
/// by −90° for negative ones, so a line and its reverse are pushed to the
/// same side. `backwards` negates the offset.
///
/// # Example
///
/// ```
/// use channel_lattice::{offset_line, Line, Point};
///
/// let line = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 2.0));
/// let left = offset_line(&line, 0.5, false);
/// assert_eq!(left.start(), Point::new(-0.5, 0.0));
/// ```
#[must_use]
pub fn offset_line(line: &Line, offset: f64, backwards: bool) -> Line {
    let direction = line.direction();
    let offset = if backwards { -offset } else { offset };
    let normal = if direction >= 0.0 {
        direction + FRAC_PI_2
    } else {
        direction - FRAC_PI_2
    };

    Line::new(
        offset_point(line.start, normal, offset),
        offset_point(line.end, normal, offset),
    )
}

/// Which end of `line` is `point`.
///
/// # Errors
///
/// Returns [`LatticeError::PointNotOnLine`] if `point` is neither endpoint.
pub fn start_or_end(line: &Line, point: &Point) -> LatticeResult<LineEnd> {
    if line.start == *point {
        Ok(LineEnd::Start)
    } else if line.end == *point {
        Ok(LineEnd::End)
    } else {
        Err(LatticeError::PointNotOnLine {
            point: *point,
            line: *line,
        })
    }
}

/// A copy of `line` with the endpoint at `at` replaced by `point`.
#[must_use]
pub const fn alter_line(line: &Line, point: Point, at: LineEnd) -> Line {
    match at {
        LineEnd::Start => Line::new(point, line.end),
        LineEnd::End => Line::new(line.start, point),
    }
}

/// The first endpoint `first` shares with `second`, if any.
#[must_use]
pub fn common_point(first: &Line, second: &Line) -> Option<Point> {
    first
        .points()
        .into_iter()
        .find(|p| second.has_endpoint(p))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_circle() -> [(f64, f64); 8] {
        [
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (-1.0, 1.0),
            (-1.0, 0.0),
            (-1.0, -1.0),
            (0.0, -1.0),
            (1.0, -1.0),
        ]
    }

    #[test]
    fn test_line_length() {
        let line = Line::new(Point::new(5.0, 0.0), Point::origin());
        assert_eq!(line_length(&line), 5.0);
    }

    #[test]
    fn test_line_direction() {
        let expected = [
            0.0,
            PI / 4.0,
            PI / 2.0,
            3.0 * PI / 4.0,
            PI,
            -3.0 * PI / 4.0,
            -PI / 2.0,
            -PI / 4.0,
        ];
        for ((x, y), want) in unit_circle().into_iter().zip(expected) {
            let line = Line::new(Point::origin(), Point::new(x, y));
            assert_relative_eq!(line_direction(&line), want, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_line_degrees() {
        let expected = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
        for ((x, y), want) in unit_circle().into_iter().zip(expected) {
            let line = Line::new(Point::origin(), Point::new(x, y));
            assert_relative_eq!(line_degrees(&line), want, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_offset_round_trip_length() {
        let center = Point::new(1.5, -2.0);
        for step in 0..16 {
            let theta = f64::from(step) * PI / 8.0;
            for radius in [0.25, 1.0, 7.5] {
                let line = Line::new(offset_point(center, theta, radius), center);
                assert_relative_eq!(line_length(&line), radius, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_intersection_of_diagonals() {
        let a = Line::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        let b = Line::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
        assert_eq!(intersection(&a, &b).unwrap(), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_intersection_extends_lines() {
        // Segments do not overlap but their extensions meet.
        let a = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let b = Line::new(Point::new(3.0, 1.0), Point::new(3.0, 2.0));
        assert_eq!(intersection(&a, &b).unwrap(), Point::new(3.0, 0.0));
    }

    #[test]
    fn test_intersection_parallel_fails() {
        let a = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Line::new(Point::new(0.0, 1.0), Point::new(1.0, 2.0));
        let err = intersection(&a, &b).unwrap_err();
        assert!(matches!(err, LatticeError::ParallelLines { .. }));
    }

    #[test]
    fn test_intersection_degenerate_fails() {
        let a = Line::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
        let b = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert!(intersection(&a, &b).is_err());
    }

    #[test]
    fn test_offset_line_is_parallel_at_distance() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        let forward = offset_line(&line, 0.5, false);
        let backward = offset_line(&line, 0.5, true);

        assert_relative_eq!(forward.direction(), line.direction(), epsilon = 1e-4);
        assert_relative_eq!(
            forward.start().vector_to(&backward.start()).norm(),
            1.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_offset_line_reverse_same_side() {
        // Headings of opposite sign rotate the opposite way, so both land left.
        let up = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 2.0));
        let down = up.reversed();
        assert_eq!(offset_line(&up, 1.0, false).start().x(), -1.0);
        assert_eq!(offset_line(&down, 1.0, false).start().x(), -1.0);
    }

    #[test]
    fn test_start_or_end() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_eq!(start_or_end(&line, &Point::origin()).unwrap(), LineEnd::Start);
        assert_eq!(
            start_or_end(&line, &Point::new(1.0, 0.0)).unwrap(),
            LineEnd::End
        );
        assert!(matches!(
            start_or_end(&line, &Point::new(0.5, 0.0)),
            Err(LatticeError::PointNotOnLine { .. })
        ));
    }

    #[test]
    fn test_alter_line() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let p = Point::new(9.0, 9.0);
        assert_eq!(alter_line(&line, p, LineEnd::Start), Line::new(p, line.end()));
        assert_eq!(alter_line(&line, p, LineEnd::End), Line::new(line.start(), p));
    }

    #[test]
    fn test_common_point() {
        let a = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Line::new(Point::new(2.0, 0.0), Point::new(1.0, 1.0));
        let c = Line::new(Point::new(5.0, 5.0), Point::new(6.0, 6.0));
        assert_eq!(common_point(&a, &b), Some(Point::new(1.0, 1.0)));
        assert_eq!(common_point(&a, &c), None);
    }

    #[test]
    fn test_line_equality_is_directed() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_ne!(line, line.reversed());
        assert_eq!(line, line.reversed().reversed());
    }

    #[test]
    fn test_upward_orders_by_y() {
        let low = Point::new(3.0, 0.0);
        let high = Point::new(-1.0, 2.5);
        assert_eq!(Line::upward(high, low), Line::new(low, high));
        assert_eq!(Line::upward(low, high), Line::new(low, high));
    }
}
