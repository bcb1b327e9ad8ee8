use std::fmt;
use std::iter::FusedIterator;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{bounds_2d, signed_area_2d};
use crate::math::Point2;

use super::{Point2d, Rectangle, Segment};

/// Whether a polyline's last point connects back to its first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolylineKind {
    #[default]
    Open,
    Closed,
}

/// An ordered sequence of points, open or closed.
///
/// A closed polyline never stores its first point again at the end; the
/// wrap-around edge is implicit. Equality compares points in order: the same
/// ring listed from another starting point is a different polyline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point2d>,
    kind: PolylineKind,
}

impl Polyline {
    /// Creates an empty polyline.
    #[must_use]
    pub fn new(kind: PolylineKind) -> Self {
        Self {
            points: Vec::new(),
            kind,
        }
    }

    /// Creates a polyline from points.
    ///
    /// For a closed polyline a trailing copy of the first point is dropped.
    pub fn from_points<I>(points: I, kind: PolylineKind) -> Self
    where
        I: IntoIterator<Item = Point2d>,
    {
        let mut pline = Self {
            points: points.into_iter().collect(),
            kind,
        };
        if kind == PolylineKind::Closed {
            pline.strip_closing_points();
        }
        pline
    }

    /// Appends a point.
    ///
    /// On a closed polyline, a point coinciding with the first point is the
    /// implicit closing point and is not stored.
    pub fn push(&mut self, p: Point2d) {
        if self.is_closed() && self.points.first().is_some_and(|first| first.approx_eq(&p)) {
            tracing::trace!(point = %p, "closing point not stored on closed polyline");
            return;
        }
        self.points.push(p);
    }

    /// Marks the polyline closed, dropping an explicit closing point if present.
    pub fn close(&mut self) {
        self.kind = PolylineKind::Closed;
        self.strip_closing_points();
    }

    /// Marks the polyline open. The stored points are unchanged.
    pub fn open(&mut self) {
        self.kind = PolylineKind::Open;
    }

    /// Switches between open and closed.
    pub fn toggle(&mut self) {
        match self.kind {
            PolylineKind::Open => self.close(),
            PolylineKind::Closed => self.open(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PolylineKind {
        self.kind
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.kind == PolylineKind::Closed
    }

    #[must_use]
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of edges: `n - 1` when open, `n` when closed with three or
    /// more points. Fewer than two points give no edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let n = self.points.len();
        match n {
            0 | 1 => 0,
            2 => 1,
            _ if self.is_closed() => n,
            _ => n - 1,
        }
    }

    /// Iterates over the edges. Call again to restart.
    #[must_use]
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            points: &self.points,
            index: 0,
            count: self.edge_count(),
        }
    }

    /// Total length of all edges.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.edges().map(|e| e.length()).sum()
    }

    /// Signed area of the ring (shoelace); positive when counter-clockwise.
    /// Open polylines are measured as if closed.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.raw_points())
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if the ring winds clockwise (negative signed area).
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Axis-aligned bounding box.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the polyline is empty or
    /// has zero width or height.
    pub fn bounding_box(&self) -> Result<Rectangle> {
        let (lo, hi) = bounds_2d(&self.raw_points()).ok_or_else(|| {
            GeometryError::DegenerateInput("bounding box of an empty polyline".into())
        })?;
        Rectangle::from_corners(&Point2d::from(lo), &Point2d::from(hi))
    }

    /// Returns the polyline traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self {
            points,
            kind: self.kind,
        }
    }

    /// Rebuilds a polyline from already-normalized parts.
    pub(crate) fn with_points(&self, points: Vec<Point2d>) -> Self {
        Self {
            points,
            kind: self.kind,
        }
    }

    fn raw_points(&self) -> Vec<Point2> {
        self.points.iter().map(Point2d::to_point2).collect()
    }

    fn strip_closing_points(&mut self) {
        while self.points.len() > 1 {
            let (first, last) = (self.points[0], self.points[self.points.len() - 1]);
            if !first.approx_eq(&last) {
                break;
            }
            tracing::trace!(point = %last, "dropping explicit closing point");
            self.points.pop();
        }
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_closed() { "closed" } else { "open" };
        write!(f, "{tag} polyline, {} points:", self.points.len())?;
        for p in &self.points {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

/// Iterator over the edges of a [`Polyline`].
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    points: &'a [Point2d],
    index: usize,
    count: usize,
}

impl Iterator for Edges<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.index >= self.count {
            return None;
        }
        let i = self.index;
        self.index += 1;
        let j = (i + 1) % self.points.len();
        Some(Segment::new_unchecked(self.points[i], self.points[j]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl FusedIterator for Edges<'_> {}
