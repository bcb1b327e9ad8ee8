use crate::geometry::{Circle, Line2d, LineRelation, Point2d, Segment};
use crate::math::intersect_2d::segment_circle_intersect_2d;

use super::{Contact, Intersection};

/// Intersection of an infinite line with a circle.
///
/// The distance `d` from the center to the line is compared with the radius:
/// no contact when `d > r`, one tangent point when `d = r`, otherwise two
/// crossing points sorted by ascending position along [`Line2d::direction`].
#[must_use]
pub fn line_circle(line: &Line2d, circle: &Circle) -> Intersection {
    let foot = line.project(&circle.center());
    let contacts = match circle.classify_line(line) {
        LineRelation::Disjoint => Vec::new(),
        LineRelation::Tangent => vec![Contact::Tangent(foot)],
        LineRelation::Secant => {
            let d = line.distance_to(&circle.center());
            let r = circle.radius();
            let half_chord = ((r - d) * (r + d)).max(0.0).sqrt();
            let t = line.param_of(&foot);
            vec![
                Contact::Crossing(line.point_at(t - half_chord)),
                Contact::Crossing(line.point_at(t + half_chord)),
            ]
        }
    };
    Intersection::from_contacts(contacts)
}

/// Contacts between a circle and a bounded segment, in segment order.
///
/// Solved in the segment's own parameter, so the result does not degrade far
/// from the origin.
pub(crate) fn segment_circle_contacts(segment: &Segment, circle: &Circle) -> Vec<Contact> {
    segment_circle_intersect_2d(
        &segment.start().to_point2(),
        &segment.end().to_point2(),
        &circle.center().to_point2(),
        circle.radius(),
    )
    .into_iter()
    .map(|hit| {
        let p = Point2d::from(hit.point);
        if hit.tangent {
            Contact::Tangent(p)
        } else {
            Contact::Crossing(p)
        }
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn unit_circle() -> Circle {
        Circle::new(Point2d::new(0.0, 0.0), 1.0).unwrap()
    }

    #[test]
    fn secant_points_ordered_along_direction() {
        let line = Line2d::from_points(&Point2d::new(-2.0, 0.0), &Point2d::new(2.0, 0.0)).unwrap();
        let hit = line_circle(&line, &unit_circle());
        let pts = hit.points();
        assert_eq!(pts.len(), 2);
        assert!(line.param_of(&pts[0]) < line.param_of(&pts[1]));
        for p in &pts {
            assert_relative_eq!(p.x().abs(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(p.y(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn tangent_point() {
        let line = Line2d::from_coefficients(0.0, 1.0, -1.0).unwrap();
        let hit = line_circle(&line, &unit_circle());
        assert_eq!(hit.contacts(), &[Contact::Tangent(Point2d::new(0.0, 1.0))]);
    }

    #[test]
    fn disjoint() {
        let line = Line2d::from_coefficients(1.0, 0.0, -3.0).unwrap();
        assert!(line_circle(&line, &unit_circle()).is_none());
    }

    #[test]
    fn segment_keeps_only_points_within_bounds() {
        let seg = Segment::new(Point2d::new(0.0, 0.0), Point2d::new(5.0, 0.0)).unwrap();
        let contacts = segment_circle_contacts(&seg, &unit_circle());
        assert_eq!(contacts, vec![Contact::Crossing(Point2d::new(1.0, 0.0))]);

        let through = Segment::new(Point2d::new(3.0, 0.0), Point2d::new(-3.0, 0.0)).unwrap();
        let contacts = segment_circle_contacts(&through, &unit_circle());
        assert_eq!(
            contacts,
            vec![
                Contact::Crossing(Point2d::new(1.0, 0.0)),
                Contact::Crossing(Point2d::new(-1.0, 0.0)),
            ]
        );
    }

    #[test]
    fn segment_far_from_origin_keeps_both_crossings() {
        for base in [1e2, 1e4, 1e5, 1e6] {
            let p0 = Point2d::new(base - 30.0, base + 10.0);
            let p1 = Point2d::new(base + 70.0, base - 20.0);
            let seg = Segment::new(p0, p1).unwrap();
            let circle = Circle::new(seg.midpoint(), 20.0).unwrap();
            let contacts = segment_circle_contacts(&seg, &circle);
            assert_eq!(contacts.len(), 2, "base {base}");
            for c in &contacts {
                let Contact::Crossing(p) = c else {
                    panic!("expected crossing, got {c:?}");
                };
                assert!((circle.center().distance_to(p) - 20.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn segment_tangent_from_discriminant() {
        let seg = Segment::new(Point2d::new(-3.0, 1.0), Point2d::new(3.0, 1.0)).unwrap();
        let contacts = segment_circle_contacts(&seg, &unit_circle());
        assert_eq!(contacts, vec![Contact::Tangent(Point2d::new(0.0, 1.0))]);
    }
}
