//! Rounded 2D points.
//!
//! Every coordinate is rounded to [`PRECISION`] decimal places when a point is
//! built. Points reached through different arithmetic paths (a node position
//! and a line intersection landing on it, say) therefore compare and hash
//! equal, which the joining and cutting logic relies on to find shared
//! vertices.

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of decimal places kept for every coordinate.
pub const PRECISION: i32 = 5;

/// Round a coordinate to [`PRECISION`] decimal places.
///
/// Negative zero is folded into positive zero so that equal points hash
/// identically.
#[must_use]
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    (value * scale).round() / scale + 0.0
}

/// A node or wall vertex in the lattice plane.
///
/// # Example
///
/// ```
/// use channel_lattice::Point;
///
/// let a = Point::new(0.1 + 0.2, 1.0);
/// let b = Point::new(0.3, 1.0);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Point {
    position: Point2<f64>,
}

impl Point {
    /// Create a point, rounding both coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(round_coordinate(x), round_coordinate(y)),
        }
    }

    /// The origin.
    #[must_use]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// The underlying nalgebra point.
    #[must_use]
    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    /// Vector from this point to `other`.
    #[must_use]
    pub fn vector_to(&self, other: &Self) -> Vector2<f64> {
        other.position - self.position
    }

    /// Translate this point by a vector, rounding the result.
    #[must_use]
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Point2::from(self.position.coords + offset).into()
    }
}

// Coordinates are rounded at construction, so bitwise equality on the
// stored values agrees with `PartialEq` for every finite point.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.x.to_bits().hash(state);
        self.position.y.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.position.x, self.position.y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(position: Point2<f64>) -> Self {
        Self::new(position.x, position.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x(), point.y()]
    }
}

/// Move `point` a distance `offset` along the heading `direction` (radians).
///
/// # Example
///
/// ```
/// use channel_lattice::{offset_point, Point};
/// use std::f64::consts::FRAC_PI_2;
///
/// let moved = offset_point(Point::origin(), FRAC_PI_2, 2.0);
/// assert_eq!(moved, Point::new(0.0, 2.0));
/// ```
#[must_use]
pub fn offset_point(point: Point, direction: f64, offset: f64) -> Point {
    point.translated(Vector2::new(direction.cos(), direction.sin()) * offset)
}
