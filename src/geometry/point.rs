use std::fmt;
use std::ops::Sub;

use crate::math::Vector2;

/// A point in the 2D Cartesian plane.
///
/// Equality is exact on both coordinates. Use [`Point::approx_eq`] when a
/// tolerance is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point with the given coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        (*self - *other).norm()
    }

    /// Exact coordinate equality, no tolerance.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn equals(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Returns `true` if both coordinates differ by at most `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// Position vector of this point.
    #[must_use]
    pub fn to_vector(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Sub for Point {
    type Output = Vector2;

    fn sub(self, rhs: Point) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}
