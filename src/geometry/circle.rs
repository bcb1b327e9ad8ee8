use std::f64::consts::PI;
use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::tolerance;

use super::{Line2d, Point2d, Rectangle};

/// Location of a point relative to a closed curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    On,
    Outside,
}

/// How a line meets a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRelation {
    /// Two crossing points.
    Secant,
    /// One touching point.
    Tangent,
    Disjoint,
}

/// How two circles meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleRelation {
    /// Apart, each outside the other.
    Disjoint,
    /// One strictly inside the other without contact.
    Nested,
    /// Touching from the outside at one point.
    TangentExternal,
    /// Touching from the inside at one point.
    TangentInternal,
    /// Crossing at two points.
    Secant,
    /// Same center and radius.
    Coincident,
}

/// A circle given by its center and a positive radius.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Point2d,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the radius is not positive.
    pub fn new(center: Point2d, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= tolerance() {
            return Err(GeometryError::DegenerateInput(format!(
                "circle radius must be positive, got {radius}"
            ))
            .into());
        }
        Ok(Self { center, radius })
    }

    #[must_use]
    pub fn center(&self) -> Point2d {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Classifies `p` against the circle, comparing its distance to the center
    /// with the radius.
    #[must_use]
    pub fn locate(&self, p: &Point2d) -> PointLocation {
        let delta = self.center.distance_to(p) - self.radius;
        if delta.abs() <= tolerance() {
            PointLocation::On
        } else if delta < 0.0 {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }

    /// Returns `true` if `p` is inside or on the circle.
    #[must_use]
    pub fn contains(&self, p: &Point2d) -> bool {
        self.locate(p) != PointLocation::Outside
    }

    /// Classifies a line as secant, tangent or disjoint.
    #[must_use]
    pub fn classify_line(&self, line: &Line2d) -> LineRelation {
        let delta = line.distance_to(&self.center) - self.radius;
        if delta.abs() <= tolerance() {
            LineRelation::Tangent
        } else if delta < 0.0 {
            LineRelation::Secant
        } else {
            LineRelation::Disjoint
        }
    }

    /// Classifies the relative position of two circles.
    #[must_use]
    pub fn relation_to(&self, other: &Circle) -> CircleRelation {
        let eps = tolerance();
        let d = self.center.distance_to(&other.center);
        let sum = self.radius + other.radius;
        let diff = (self.radius - other.radius).abs();

        if d <= eps && diff <= eps {
            CircleRelation::Coincident
        } else if d > sum + eps {
            CircleRelation::Disjoint
        } else if (d - sum).abs() <= eps {
            CircleRelation::TangentExternal
        } else if (d - diff).abs() <= eps {
            CircleRelation::TangentInternal
        } else if d < diff {
            CircleRelation::Nested
        } else {
            CircleRelation::Secant
        }
    }

    /// Axis-aligned bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> Rectangle {
        let (x, y, r) = (self.center.x(), self.center.y(), self.radius);
        Rectangle::from_bounds(x - r, y - r, x + r, y + r)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.relation_to(other) == CircleRelation::Coincident
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "center={} radius={}", self.center, self.radius)
    }
}
