use crate::geometry::{Circle, CircleRelation, Point2d};
use crate::math::tolerance;

use super::{Contact, Intersection};

/// Intersection of two circles.
///
/// Classified first with [`Circle::relation_to`]; tangent cases give one
/// [`Contact::Tangent`], secant circles two crossings sorted by `(x, y)`, and
/// identical circles [`Intersection::Coincident`].
#[must_use]
pub fn circle_circle(c1: &Circle, c2: &Circle) -> Intersection {
    match c1.relation_to(c2) {
        CircleRelation::Coincident => Intersection::Coincident,
        CircleRelation::Disjoint | CircleRelation::Nested => Intersection::None,
        CircleRelation::TangentExternal | CircleRelation::TangentInternal => {
            // The contact lies on the larger circle, on the ray towards the other center.
            let (big, small) = if c1.radius() >= c2.radius() {
                (c1, c2)
            } else {
                (c2, c1)
            };
            let (bc, sc) = (big.center(), small.center());
            let d = bc.distance_to(&sc);
            if d <= tolerance() {
                return Intersection::None;
            }
            let k = big.radius() / d;
            let p = Point2d::new(bc.x() + k * (sc.x() - bc.x()), bc.y() + k * (sc.y() - bc.y()));
            Intersection::Contacts(vec![Contact::Tangent(p)])
        }
        CircleRelation::Secant => {
            let mut pts = secant_points(c1, c2);
            pts.sort_by(Point2d::lex_cmp);
            Intersection::Contacts(pts.into_iter().map(Contact::Crossing).collect())
        }
    }
}

/// The two crossing points, from the radical line of the circles.
fn secant_points(c1: &Circle, c2: &Circle) -> Vec<Point2d> {
    let (p1, p2) = (c1.center(), c2.center());
    let (r1, r2) = (c1.radius(), c2.radius());
    let dx = p2.x() - p1.x();
    let dy = p2.y() - p1.y();
    let dist_sq = dx * dx + dy * dy;
    let dist = dist_sq.sqrt();

    // Distance from c1 along the line c1→c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    // Midpoint on the radical line.
    let mx = p1.x() + a * dx / dist;
    let my = p1.y() + a * dy / dist;

    // Perpendicular direction.
    let px = -dy / dist;
    let py = dx / dist;

    vec![
        Point2d::new(mx + h * px, my + h * py),
        Point2d::new(mx - h * px, my - h * py),
    ]
}
