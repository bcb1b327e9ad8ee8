use crate::geometry::{Line2d, Point2d};

use super::{Contact, Intersection};

/// Intersection of two infinite lines.
///
/// The meeting point is the cross product of the homogeneous coefficients.
/// Parallel lines give [`Intersection::None`], or [`Intersection::Coincident`]
/// when they are the same line.
#[must_use]
pub fn line_line(l1: &Line2d, l2: &Line2d) -> Intersection {
    if l1.is_parallel_to(l2) {
        return if l1.is_coincident_with(l2) {
            Intersection::Coincident
        } else {
            Intersection::None
        };
    }
    match Point2d::from_vector(&l1.coefficients().cross(&l2.coefficients())) {
        Ok(p) => Intersection::Contacts(vec![Contact::Crossing(p)]),
        Err(_) => Intersection::None,
    }
}
