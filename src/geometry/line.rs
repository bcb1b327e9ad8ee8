use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{approx_eq, approx_zero, tolerance, Point2, Vector2, Vector3};

use super::Point2d;

/// An infinite line `a*x + b*y + c = 0` in homogeneous form.
///
/// Coefficients are normalized so that `a² + b² = 1`, with `a > 0`, or
/// `a = 0` and `b > 0` (within tolerance). Two representations of the same
/// line therefore share one canonical triple.
#[derive(Debug, Clone, Copy)]
pub struct Line2d {
    a: f64,
    b: f64,
    c: f64,
}

impl Line2d {
    /// Creates a line from its coefficients.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if `(a, b)` is zero within tolerance.
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::from_vector(&Vector3::new(a, b, c))
    }

    /// Creates the line through two distinct points (cross product of their
    /// homogeneous coordinates).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the points coincide.
    pub fn from_points(p: &Point2d, q: &Point2d) -> Result<Self> {
        if p.approx_eq(q) {
            return Err(GeometryError::DegenerateInput(format!(
                "line through identical points {p} and {q}"
            ))
            .into());
        }
        Self::from_vector(&p.homogeneous().cross(&q.homogeneous()))
    }

    /// Creates the line through `p` with direction `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the direction is zero within tolerance.
    pub fn from_point_direction(p: &Point2d, dx: f64, dy: f64) -> Result<Self> {
        if approx_zero(dx.hypot(dy)) {
            return Err(GeometryError::DegenerateInput(format!(
                "zero-length direction ({dx}, {dy}) at {p}"
            ))
            .into());
        }
        let q = Vector3::new(p.x() + dx, p.y() + dy, 1.0);
        Self::from_vector(&p.homogeneous().cross(&q))
    }

    /// Creates the line through `p` making angle `theta` (radians) with the x axis.
    ///
    /// # Errors
    ///
    /// Never fails for finite input; the `Result` mirrors the other constructors.
    pub fn from_point_angle(p: &Point2d, theta: f64) -> Result<Self> {
        Self::from_point_direction(p, theta.cos(), theta.sin())
    }

    /// The horizontal line `y = y0`.
    #[must_use]
    pub fn horizontal(y0: f64) -> Self {
        Self { a: 0.0, b: 1.0, c: -y0 }
    }

    /// The vertical line `x = x0`.
    #[must_use]
    pub fn vertical(x0: f64) -> Self {
        Self { a: 1.0, b: 0.0, c: -x0 }
    }

    /// Builds a normalized line from a raw homogeneous triple.
    pub(crate) fn from_vector(v: &Vector3) -> Result<Self> {
        let n = v.x.hypot(v.y);
        if !n.is_finite() || approx_zero(n) {
            return Err(GeometryError::DegenerateInput(format!(
                "line coefficients ({}, {}, {}) have no direction",
                v.x, v.y, v.z
            ))
            .into());
        }
        let (mut a, mut b, mut c) = (v.x / n, v.y / n, v.z / n);
        if a < -tolerance() || (approx_zero(a) && b < 0.0) {
            a = -a;
            b = -b;
            c = -c;
        }
        Ok(Self { a, b, c })
    }

    /// Returns the normalized coefficients `(a, b, c)`.
    #[must_use]
    pub fn coefficients(&self) -> Vector3 {
        Vector3::new(self.a, self.b, self.c)
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Unit direction vector `(-b, a)`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        Vector2::new(-self.b, self.a)
    }

    /// Unit normal vector `(a, b)`.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.a, self.b)
    }

    /// The point of the line closest to the origin.
    #[must_use]
    pub fn origin(&self) -> Point2d {
        Point2d::new(-self.a * self.c, -self.b * self.c)
    }

    /// Signed distance from `p`; positive on the side the normal points to.
    #[must_use]
    pub fn signed_distance(&self, p: &Point2d) -> f64 {
        self.a * p.x() + self.b * p.y() + self.c
    }

    /// Perpendicular distance from `p`.
    #[must_use]
    pub fn distance_to(&self, p: &Point2d) -> f64 {
        self.signed_distance(p).abs()
    }

    /// Returns `true` if `p` lies on the line within tolerance.
    #[must_use]
    pub fn contains(&self, p: &Point2d) -> bool {
        self.distance_to(p) <= tolerance()
    }

    /// Position of the orthogonal projection of `p` along [`Line2d::direction`],
    /// measured from [`Line2d::origin`].
    #[must_use]
    pub fn param_of(&self, p: &Point2d) -> f64 {
        let o = self.origin();
        self.direction()
            .dot(&Vector2::new(p.x() - o.x(), p.y() - o.y()))
    }

    /// The point at signed position `t` along the line.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2d {
        let o = self.origin().to_point2();
        Point2d::from(o + self.direction() * t)
    }

    /// Orthogonal projection of `p` onto the line.
    #[must_use]
    pub fn project(&self, p: &Point2d) -> Point2d {
        let d = self.signed_distance(p);
        Point2d::from(Point2::new(p.x(), p.y()) - self.normal() * d)
    }

    /// The line through `p` perpendicular to `self`.
    #[must_use]
    pub fn orthogonal_through(&self, p: &Point2d) -> Line2d {
        Self::through_with_normal(p, -self.b, self.a)
    }

    /// The line through `p` parallel to `self`.
    #[must_use]
    pub fn parallel_through(&self, p: &Point2d) -> Line2d {
        Self::through_with_normal(p, self.a, self.b)
    }

    // `(na, nb)` is a unit vector.
    fn through_with_normal(p: &Point2d, na: f64, nb: f64) -> Line2d {
        let c = -(na * p.x() + nb * p.y());
        let v = Vector3::new(na, nb, c);
        // A unit normal cannot be degenerate.
        Self::from_vector(&v).unwrap_or(Self { a: na, b: nb, c })
    }

    /// Returns `true` if the lines are parallel (or coincident).
    ///
    /// Compares the sine of the angle between the unit normals with tolerance.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Line2d) -> bool {
        approx_zero(self.a * other.b - self.b * other.a)
    }

    /// Returns `true` if the lines are perpendicular.
    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Line2d) -> bool {
        approx_zero(self.a * other.a + self.b * other.b)
    }

    /// Returns `true` if both lines describe the same point set.
    #[must_use]
    pub fn is_coincident_with(&self, other: &Line2d) -> bool {
        self.is_parallel_to(other) && other.contains(&self.origin())
    }

    /// Acute angle between the two lines, in `[0, π/2]`.
    #[must_use]
    pub fn angle_to(&self, other: &Line2d) -> f64 {
        let cross = self.a * other.b - self.b * other.a;
        let dot = self.a * other.a + self.b * other.b;
        cross.abs().atan2(dot.abs())
    }
}

impl PartialEq for Line2d {
    fn eq(&self, other: &Self) -> bool {
        let same = approx_eq(self.a, other.a)
            && approx_eq(self.b, other.b)
            && approx_eq(self.c, other.c);
        // Near the sign-convention boundary the canonical triples may be negated.
        same || (approx_eq(self.a, -other.a)
            && approx_eq(self.b, -other.b)
            && approx_eq(self.c, -other.c))
    }
}

impl fmt::Display for Line2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.a, self.b, self.c)
    }
}
