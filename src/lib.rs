//! A 2D geometry kernel built on homogeneous coordinates.
//!
//! Points and lines are homogeneous 3-vectors, transformations are 3x3
//! projective matrices ([`Homogr`]), and [`intersect`] computes the contact
//! set between any two supported primitives.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{HgeomError, Result};
pub use geometry::{Circle, Line2d, Point2d, Polyline, PolylineKind, Rectangle, Segment};
pub use operations::import::{
    polyline_from_foreign, polyline_from_points, ForeignPolygon, ForeignRing,
};
pub use operations::intersect::{intersect, Contact, Intersect, Intersection, Shape};
pub use operations::transform::{Homogr, Transform};
