use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{approx_zero, tolerance};

use super::{Line2d, Point2d, PointLocation, Polyline, PolylineKind, Segment};

/// An axis-aligned rectangle.
///
/// Stored as its minimum and maximum corners. The four corners are always
/// reported in the order `(xmin, ymin)`, `(xmax, ymin)`, `(xmax, ymax)`,
/// `(xmin, ymax)`, whatever pair of opposite corners it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    min: Point2d,
    max: Point2d,
}

impl Rectangle {
    /// Creates a rectangle from two opposite corners, in any order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the corners share an x or y
    /// coordinate (zero width or height).
    pub fn from_corners(p: &Point2d, q: &Point2d) -> Result<Self> {
        if approx_zero(p.x() - q.x()) || approx_zero(p.y() - q.y()) {
            return Err(GeometryError::DegenerateInput(format!(
                "rectangle corners {p} and {q} are aligned on an axis"
            ))
            .into());
        }
        Ok(Self::from_bounds(p.x(), p.y(), q.x(), q.y()))
    }

    pub(crate) fn from_bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: Point2d::new(x0.min(x1), y0.min(y1)),
            max: Point2d::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[must_use]
    pub fn min_corner(&self) -> Point2d {
        self.min
    }

    #[must_use]
    pub fn max_corner(&self) -> Point2d {
        self.max
    }

    /// The four corners in canonical order.
    #[must_use]
    pub fn corners(&self) -> [Point2d; 4] {
        [
            self.min,
            Point2d::new(self.max.x(), self.min.y()),
            self.max,
            Point2d::new(self.min.x(), self.max.y()),
        ]
    }

    /// The four edges, following the corner order and closing back to the first corner.
    #[must_use]
    pub fn edges(&self) -> [Segment; 4] {
        let c = self.corners();
        [
            Segment::new_unchecked(c[0], c[1]),
            Segment::new_unchecked(c[1], c[2]),
            Segment::new_unchecked(c[2], c[3]),
            Segment::new_unchecked(c[3], c[0]),
        ]
    }

    /// Supporting lines of the four edges, in edge order.
    #[must_use]
    pub fn edge_lines(&self) -> [Line2d; 4] {
        [
            Line2d::horizontal(self.min.y()),
            Line2d::vertical(self.max.x()),
            Line2d::horizontal(self.max.y()),
            Line2d::vertical(self.min.x()),
        ]
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[must_use]
    pub fn diagonal_length(&self) -> f64 {
        self.width().hypot(self.height())
    }

    #[must_use]
    pub fn center(&self) -> Point2d {
        self.min.midpoint(&self.max)
    }

    /// Classifies `p` as inside, on the boundary or outside.
    #[must_use]
    pub fn locate(&self, p: &Point2d) -> PointLocation {
        let eps = tolerance();
        let (x, y) = (p.x(), p.y());
        let outside = x < self.min.x() - eps
            || x > self.max.x() + eps
            || y < self.min.y() - eps
            || y > self.max.y() + eps;
        if outside {
            return PointLocation::Outside;
        }
        let on_edge = approx_zero(x - self.min.x())
            || approx_zero(x - self.max.x())
            || approx_zero(y - self.min.y())
            || approx_zero(y - self.max.y());
        if on_edge {
            PointLocation::On
        } else {
            PointLocation::Inside
        }
    }

    /// Returns `true` if `p` is inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2d) -> bool {
        self.locate(p) != PointLocation::Outside
    }

    /// The rectangle as a closed 4-point polyline, corners in canonical order.
    #[must_use]
    pub fn to_polyline(&self) -> Polyline {
        Polyline::from_points(self.corners(), PolylineKind::Closed)
    }
}

impl From<Rectangle> for Polyline {
    fn from(rect: Rectangle) -> Self {
        rect.to_polyline()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn corner_order_is_canonical() {
        let rect = |x0, y0, x1, y1| {
            Rectangle::from_corners(&Point2d::new(x0, y0), &Point2d::new(x1, y1)).unwrap()
        };
        let a = rect(0.0, 0.0, 200.0, 80.0);
        let b = rect(200.0, 0.0, 0.0, 80.0);
        let c = rect(200.0, 80.0, 0.0, 0.0);
        assert_eq!(a, b);
        assert_eq!(a.corners(), c.corners());
        assert_eq!(
            a.corners(),
            [
                Point2d::new(0.0, 0.0),
                Point2d::new(200.0, 0.0),
                Point2d::new(200.0, 80.0),
                Point2d::new(0.0, 80.0),
            ]
        );
    }

    #[test]
    fn aligned_corners_rejected() {
        let err =
            Rectangle::from_corners(&Point2d::new(1.0, 0.0), &Point2d::new(1.0, 5.0)).unwrap_err();
        assert!(err.is_degenerate_input());
        assert!(Rectangle::from_corners(&Point2d::new(0.0, 2.0), &Point2d::new(3.0, 2.0)).is_err());
    }

    #[test]
    fn measures() {
        let r = Rectangle::from_corners(&Point2d::new(1.0, 1.0), &Point2d::new(4.0, 5.0)).unwrap();
        assert_relative_eq!(r.width(), 3.0);
        assert_relative_eq!(r.height(), 4.0);
        assert_relative_eq!(r.area(), 12.0);
        assert_relative_eq!(r.diagonal_length(), 5.0);
        assert_eq!(r.center(), Point2d::new(2.5, 3.0));
    }

    #[test]
    fn edges_lie_on_edge_lines() {
        let r = Rectangle::from_corners(&Point2d::new(-1.0, 2.0), &Point2d::new(3.0, 7.0)).unwrap();
        for (edge, line) in r.edges().iter().zip(r.edge_lines().iter()) {
            assert!(line.contains(&edge.start()));
            assert!(line.contains(&edge.end()));
            assert_eq!(edge.line().unwrap(), *line);
        }
        assert_eq!(r.edges()[3].end(), r.corners()[0]);
    }

    #[test]
    fn point_location() {
        let r = Rectangle::from_corners(&Point2d::new(0.0, 0.0), &Point2d::new(2.0, 2.0)).unwrap();
        assert_eq!(r.locate(&Point2d::new(1.0, 1.0)), PointLocation::Inside);
        assert_eq!(r.locate(&Point2d::new(2.0, 1.0)), PointLocation::On);
        assert_eq!(r.locate(&Point2d::new(3.0, 1.0)), PointLocation::Outside);
    }

    #[test]
    fn converts_to_closed_polyline() {
        let r = Rectangle::from_corners(&Point2d::new(0.0, 0.0), &Point2d::new(2.0, 1.0)).unwrap();
        let pl = Polyline::from(r);
        assert!(pl.is_closed());
        assert_eq!(pl.len(), 4);
        assert_eq!(pl.edges().count(), 4);
    }
}
