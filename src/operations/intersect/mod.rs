//! Intersections between pairs of primitives.
//!
//! Every pair of [`Shape`] kinds is handled by one routine; [`intersect`]
//! dispatches on the pair of tags and the [`Intersect`] trait offers the same
//! routines for statically known pairs. Degenerate configurations (parallel
//! lines, tangencies, overlapping edges) are result variants, never errors.

mod circle_circle;
mod line_circle;
mod line_line;
mod polyline;

pub use circle_circle::circle_circle;
pub use line_circle::line_circle;
pub use line_line::line_line;
pub use polyline::{circle_polyline, line_polyline, polyline_polyline};

use crate::geometry::{Circle, Line2d, Point2d, Polyline, Rectangle, Segment};

/// One element of an intersection set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// The primitives cross at a point.
    Crossing(Point2d),
    /// The primitives touch at a point without crossing.
    Tangent(Point2d),
    /// Collinear edges share a stretch.
    Overlap(Segment),
}

impl Contact {
    /// The contact point, or both ends of an overlap.
    #[must_use]
    pub fn points(&self) -> Vec<Point2d> {
        match self {
            Contact::Crossing(p) | Contact::Tangent(p) => vec![*p],
            Contact::Overlap(s) => vec![s.start(), s.end()],
        }
    }

    #[must_use]
    pub fn is_tangent(&self) -> bool {
        matches!(self, Contact::Tangent(_))
    }
}

/// Result of intersecting two primitives.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Intersection {
    #[default]
    None,
    /// Both primitives are the same line or the same circle.
    Coincident,
    /// A finite, non-empty set of contacts.
    Contacts(Vec<Contact>),
}

impl Intersection {
    pub(crate) fn from_contacts(contacts: Vec<Contact>) -> Self {
        if contacts.is_empty() {
            Intersection::None
        } else {
            Intersection::Contacts(contacts)
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Intersection::None)
    }

    #[must_use]
    pub fn is_coincident(&self) -> bool {
        matches!(self, Intersection::Coincident)
    }

    /// Returns `true` if the primitives meet at all.
    #[must_use]
    pub fn exists(&self) -> bool {
        !self.is_none()
    }

    /// The contacts; empty for `None` and `Coincident`.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        match self {
            Intersection::Contacts(c) => c,
            Intersection::None | Intersection::Coincident => &[],
        }
    }

    /// All contact points, overlap ends included, for drawing.
    #[must_use]
    pub fn points(&self) -> Vec<Point2d> {
        self.contacts().iter().flat_map(Contact::points).collect()
    }
}

/// Tag of a [`Shape`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    Polyline,
}

/// The closed set of primitives the engine intersects.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line2d),
    Circle(Circle),
    Polyline(Polyline),
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polyline(_) => ShapeKind::Polyline,
        }
    }
}

impl From<Line2d> for Shape {
    fn from(l: Line2d) -> Self {
        Shape::Line(l)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polyline> for Shape {
    fn from(p: Polyline) -> Self {
        Shape::Polyline(p)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Polyline(r.to_polyline())
    }
}

/// Intersects two shapes of any kinds.
///
/// Symmetric: swapping the arguments reports the same set of points.
#[must_use]
#[tracing::instrument(level = "trace", skip_all, fields(a = ?a.kind(), b = ?b.kind()))]
pub fn intersect(a: &Shape, b: &Shape) -> Intersection {
    match (a, b) {
        (Shape::Line(l1), Shape::Line(l2)) => line_line(l1, l2),
        (Shape::Line(l), Shape::Circle(c)) | (Shape::Circle(c), Shape::Line(l)) => {
            line_circle(l, c)
        }
        (Shape::Line(l), Shape::Polyline(p)) | (Shape::Polyline(p), Shape::Line(l)) => {
            line_polyline(l, p)
        }
        (Shape::Circle(c1), Shape::Circle(c2)) => circle_circle(c1, c2),
        (Shape::Circle(c), Shape::Polyline(p)) | (Shape::Polyline(p), Shape::Circle(c)) => {
            circle_polyline(c, p)
        }
        (Shape::Polyline(p1), Shape::Polyline(p2)) => polyline_polyline(p1, p2),
    }
}

/// Statically typed intersection between two primitives.
pub trait Intersect<Rhs: ?Sized = Self> {
    fn intersects(&self, other: &Rhs) -> Intersection;
}

macro_rules! impl_intersect {
    ($lhs:ty, $rhs:ty, $f:ident) => {
        impl Intersect<$rhs> for $lhs {
            fn intersects(&self, other: &$rhs) -> Intersection {
                $f(self, other)
            }
        }
    };
    ($lhs:ty, $rhs:ty, $f:ident, swapped) => {
        impl Intersect<$rhs> for $lhs {
            fn intersects(&self, other: &$rhs) -> Intersection {
                $f(other, self)
            }
        }
    };
}

impl_intersect!(Line2d, Line2d, line_line);
impl_intersect!(Line2d, Circle, line_circle);
impl_intersect!(Circle, Line2d, line_circle, swapped);
impl_intersect!(Line2d, Polyline, line_polyline);
impl_intersect!(Polyline, Line2d, line_polyline, swapped);
impl_intersect!(Circle, Circle, circle_circle);
impl_intersect!(Circle, Polyline, circle_polyline);
impl_intersect!(Polyline, Circle, circle_polyline, swapped);
impl_intersect!(Polyline, Polyline, polyline_polyline);

impl Intersect for Shape {
    fn intersects(&self, other: &Shape) -> Intersection {
        intersect(self, other)
    }
}
