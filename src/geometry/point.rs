use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_line_signed_dist;
use crate::math::{approx_zero, tolerance, Point2, Vector3};

use super::Line2d;

/// A finite point of the projective plane.
///
/// Stored in normalized form (`w = 1`); the homogeneous triple is rebuilt on
/// demand by [`Point2d::homogeneous`].
#[derive(Debug, Clone, Copy)]
pub struct Point2d {
    x: f64,
    y: f64,
}

impl Point2d {
    /// Creates a point from Cartesian coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point from homogeneous coordinates `(x, y, w)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PointAtInfinity` if `w` is zero within tolerance.
    pub fn from_homogeneous(x: f64, y: f64, w: f64) -> Result<Self> {
        if approx_zero(w) {
            return Err(GeometryError::PointAtInfinity(w).into());
        }
        Ok(Self { x: x / w, y: y / w })
    }

    pub(crate) fn from_vector(v: &Vector3) -> Result<Self> {
        Self::from_homogeneous(v.x, v.y, v.z)
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the normalized homogeneous triple `(x, y, 1)`.
    #[must_use]
    pub fn homogeneous(&self) -> Vector3 {
        Vector3::new(self.x, self.y, 1.0)
    }

    /// Returns the point as an nalgebra point.
    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Point2d) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Perpendicular distance to a line.
    #[must_use]
    pub fn distance_to_line(&self, line: &Line2d) -> f64 {
        point_to_line_signed_dist(&self.to_point2(), &line.coefficients()).abs()
    }

    /// Returns the midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(&self, other: &Point2d) -> Point2d {
        Point2d::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// Returns `true` if both coordinates agree within tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Point2d) -> bool {
        self.distance_to(other) <= tolerance()
    }

    /// Lexicographic `(x, y)` order, used for deterministic result ordering.
    pub(crate) fn lex_cmp(&self, other: &Point2d) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }
}

impl Default for Point2d {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl PartialEq for Point2d {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl From<(f64, f64)> for Point2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for Point2d {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl fmt::Display for Point2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}
