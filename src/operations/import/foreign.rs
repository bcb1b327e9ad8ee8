use tracing::instrument;

use crate::error::{AdapterError, Result};
use crate::geometry::{Point2d, Polyline, PolylineKind};
use crate::math::polygon_2d::count_distinct_2d;
use crate::math::Point2;

/// A polygon ring owned by another geometry library.
///
/// Implement this once for a foreign ring type to ingest it with
/// [`polyline_from_foreign`].
pub trait ForeignPolygon {
    /// Vertices in the foreign library's order, possibly repeating the first
    /// vertex at the end.
    fn coordinates(&self) -> Vec<(f64, f64)>;

    /// Whether the foreign type models a closed ring.
    fn is_closed_ring(&self) -> bool;

    /// The winding the foreign type declares for its vertices.
    fn is_clockwise(&self) -> bool;
}

/// Plain carrier for a foreign ring: vertices plus the two metadata flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForeignRing {
    pub points: Vec<(f64, f64)>,
    pub is_closed_ring: bool,
    pub is_clockwise: bool,
}

impl ForeignRing {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, is_closed_ring: bool, is_clockwise: bool) -> Self {
        Self {
            points,
            is_closed_ring,
            is_clockwise,
        }
    }
}

impl ForeignPolygon for ForeignRing {
    fn coordinates(&self) -> Vec<(f64, f64)> {
        self.points.clone()
    }

    fn is_closed_ring(&self) -> bool {
        self.is_closed_ring
    }

    fn is_clockwise(&self) -> bool {
        self.is_clockwise
    }
}

/// Converts a foreign ring into a canonical [`Polyline`].
///
/// See [`polyline_from_points`].
///
/// # Errors
///
/// Returns `AdapterError::MalformedRing` if a closed ring has fewer than 3
/// distinct points.
pub fn polyline_from_foreign<P: ForeignPolygon + ?Sized>(ring: &P) -> Result<Polyline> {
    polyline_from_points(&ring.coordinates(), ring.is_closed_ring(), ring.is_clockwise())
}

/// Converts an ordered point sequence plus ring metadata into a canonical
/// [`Polyline`].
///
/// A closed ring whose last point repeats the first loses that closing point
/// and is tagged [`PolylineKind::Closed`]; anything else is kept verbatim and
/// tagged [`PolylineKind::Open`]. The winding is never changed: callers that
/// need a consistent orientation check `is_clockwise` themselves.
///
/// # Errors
///
/// Returns `AdapterError::MalformedRing` if `is_closed_ring` is set and the
/// sequence has fewer than 3 distinct points.
#[instrument(level = "debug", skip(points), fields(len = points.len()))]
pub fn polyline_from_points(
    points: &[(f64, f64)],
    is_closed_ring: bool,
    is_clockwise: bool,
) -> Result<Polyline> {
    if !is_closed_ring {
        return Ok(Polyline::from_points(
            points.iter().copied().map(Point2d::from),
            PolylineKind::Open,
        ));
    }

    let raw: Vec<Point2> = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
    let distinct = count_distinct_2d(&raw);
    if distinct < 3 {
        tracing::debug!(distinct, "rejecting closed ring");
        return Err(AdapterError::MalformedRing { distinct }.into());
    }

    let pline = Polyline::from_points(
        points.iter().copied().map(Point2d::from),
        PolylineKind::Closed,
    );
    if pline.len() < points.len() {
        tracing::debug!(stripped = points.len() - pline.len(), "removed explicit closing point");
    }
    if pline.is_clockwise() != is_clockwise {
        tracing::debug!(
            declared_clockwise = is_clockwise,
            signed_area = pline.signed_area(),
            "declared winding differs from computed winding; keeping input order"
        );
    }
    Ok(pline)
}
