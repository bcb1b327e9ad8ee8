use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{tolerance, Vector2};

use super::{Line2d, Point2d};

/// A bounded line segment between two points.
///
/// Polyline and rectangle edges are exposed as segments. A segment built by
/// [`Segment::new`] has distinct endpoints; edges of degenerate containers may
/// be zero-length, see [`Segment::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2d,
    end: Point2d,
}

impl Segment {
    /// Creates a segment between two distinct points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the points coincide.
    pub fn new(start: Point2d, end: Point2d) -> Result<Self> {
        if start.approx_eq(&end) {
            return Err(GeometryError::DegenerateInput(format!(
                "segment endpoints coincide at {start}"
            ))
            .into());
        }
        Ok(Self { start, end })
    }

    pub(crate) fn new_unchecked(start: Point2d, end: Point2d) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> Point2d {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point2d {
        self.end
    }

    /// Returns the endpoints as a pair.
    #[must_use]
    pub fn points(&self) -> (Point2d, Point2d) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2d {
        self.start.midpoint(&self.end)
    }

    /// Returns `true` if the endpoints coincide within tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() <= tolerance()
    }

    /// Vector from start to end (not normalized).
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end.to_point2() - self.start.to_point2()
    }

    /// The supporting line.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` for a zero-length segment.
    pub fn line(&self) -> Result<Line2d> {
        Line2d::from_points(&self.start, &self.end)
    }

    /// The point at parameter `t` (`0` = start, `1` = end).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2d {
        Point2d::from(self.start.to_point2() + self.vector() * t)
    }

    /// Distance from `p` to the closest point of the segment.
    #[must_use]
    pub fn distance_to(&self, p: &Point2d) -> f64 {
        point_to_segment_dist(&p.to_point2(), &self.start.to_point2(), &self.end.to_point2())
    }

    /// Returns `true` if `p` lies on the segment within tolerance.
    #[must_use]
    pub fn contains(&self, p: &Point2d) -> bool {
        self.distance_to(p) <= tolerance()
    }

    /// Returns the segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Equality that ignores the direction of traversal.
    #[must_use]
    pub fn same_points_as(&self, other: &Segment) -> bool {
        self == other || self.reversed() == *other
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn segment_basics() {
        let s = Segment::new(Point2d::new(0.0, 0.0), Point2d::new(3.0, 4.0)).unwrap();
        assert_relative_eq!(s.length(), 5.0);
        assert_eq!(s.midpoint(), Point2d::new(1.5, 2.0));
        assert_eq!(s.point_at(0.2), Point2d::new(0.6, 0.8));
        assert!(s.contains(&Point2d::new(1.5, 2.0)));
        assert!(!s.contains(&Point2d::new(6.0, 8.0)));
        assert!(s.line().unwrap().contains(&Point2d::new(6.0, 8.0)));
    }

    #[test]
    fn zero_length_rejected() {
        assert!(Segment::new(Point2d::new(1.0, 1.0), Point2d::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn direction_insensitive_equality() {
        let s = Segment::new(Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.0)).unwrap();
        assert_ne!(s, s.reversed());
        assert!(s.same_points_as(&s.reversed()));
    }
}
