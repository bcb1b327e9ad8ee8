use std::cmp::Ordering;

use crate::geometry::{Circle, Line2d, Point2d, PointLocation, Polyline, Segment};
use crate::math::intersect_2d::{
    collinear_overlap_2d, line_line_intersect_2d, param_tolerance, segment_segment_intersect_2d,
};
use crate::math::{approx_zero, tolerance};

use super::line_circle::segment_circle_contacts;
use super::{Contact, Intersection};

/// Intersection of a line with every edge of a polyline.
///
/// An edge lying on the line is reported as one [`Contact::Overlap`]. A
/// vertex where the polyline touches the line and turns back is a
/// [`Contact::Tangent`].
#[must_use]
pub fn line_polyline(line: &Line2d, pline: &Polyline) -> Intersection {
    let mut acc = ContactSet::default();
    for edge in pline.edges() {
        line_segment(line, &edge, &mut acc);
    }
    acc.retag_vertex_touches(pline, |v| {
        let d = line.signed_distance(v);
        if approx_zero(d) {
            Ordering::Equal
        } else {
            d.total_cmp(&0.0)
        }
    });
    acc.finish()
}

/// Intersection of a circle with every edge of a polyline.
///
/// Vertex contacts are tangent when both neighbouring vertices lie on the
/// same side of the circle.
#[must_use]
pub fn circle_polyline(circle: &Circle, pline: &Polyline) -> Intersection {
    let mut acc = ContactSet::default();
    for edge in pline.edges() {
        for contact in segment_circle_contacts(&edge, circle) {
            acc.push(contact);
        }
    }
    acc.retag_vertex_touches(pline, |v| match circle.locate(v) {
        PointLocation::Inside => Ordering::Less,
        PointLocation::On => Ordering::Equal,
        PointLocation::Outside => Ordering::Greater,
    });
    acc.finish()
}

/// Intersection of two polylines, edge against edge.
///
/// Contacts follow the edge order of `a`; collinear overlapping edges give
/// [`Contact::Overlap`] segments oriented along `a`.
#[must_use]
pub fn polyline_polyline(a: &Polyline, b: &Polyline) -> Intersection {
    let mut acc = ContactSet::default();
    for ea in a.edges() {
        for eb in b.edges() {
            segment_segment(&ea, &eb, &mut acc);
        }
    }
    acc.finish()
}

fn line_segment(line: &Line2d, seg: &Segment, acc: &mut ContactSet) {
    let (s0, s1) = (seg.start(), seg.end());
    if seg.is_degenerate() {
        if line.contains(&s0) {
            acc.push(Contact::Crossing(s0));
        }
        return;
    }
    let origin = line.origin().to_point2();
    match line_line_intersect_2d(&origin, &line.direction(), &s0.to_point2(), &seg.vector()) {
        Some((_, u)) => {
            let eps = param_tolerance(seg.length());
            if (-eps..=1.0 + eps).contains(&u) {
                // Hits at a vertex report the vertex itself.
                let p = if u <= eps {
                    s0
                } else if u >= 1.0 - eps {
                    s1
                } else {
                    seg.point_at(u)
                };
                acc.push(Contact::Crossing(p));
            }
        }
        None => {
            if line.contains(&s0) && line.contains(&s1) {
                acc.push(Contact::Overlap(*seg));
            }
        }
    }
}

fn segment_segment(a: &Segment, b: &Segment, acc: &mut ContactSet) {
    // A zero-length edge is a point, whichever side it comes from.
    if a.is_degenerate() || b.is_degenerate() {
        let (p, other) = if a.is_degenerate() {
            (a.start(), b)
        } else {
            (b.start(), a)
        };
        if other.contains(&p) {
            acc.push(Contact::Crossing(p));
        }
        return;
    }
    let (a0, a1) = (a.start().to_point2(), a.end().to_point2());
    let (b0, b1) = (b.start().to_point2(), b.end().to_point2());
    if let Some((p, _, _)) = segment_segment_intersect_2d(&a0, &a1, &b0, &b1) {
        acc.push(Contact::Crossing(Point2d::from(p)));
        return;
    }
    if let Some((lo, hi)) = collinear_overlap_2d(&a0, &a1, &b0, &b1) {
        let (start, end) = (a.point_at(lo), a.point_at(hi));
        if start.approx_eq(&end) {
            acc.push(Contact::Crossing(start));
        } else {
            acc.push(Contact::Overlap(Segment::new_unchecked(start, end)));
        }
    }
}

/// Accumulates contacts, merging points closer than the tolerance.
#[derive(Debug, Default)]
struct ContactSet {
    contacts: Vec<Contact>,
}

impl ContactSet {
    fn push(&mut self, contact: Contact) {
        match contact {
            Contact::Crossing(p) | Contact::Tangent(p) => {
                let seen = self.contacts.iter().any(|c| match c {
                    Contact::Crossing(q) | Contact::Tangent(q) => q.approx_eq(&p),
                    Contact::Overlap(_) => false,
                });
                if !seen {
                    self.contacts.push(contact);
                }
            }
            Contact::Overlap(s) => {
                let seen = self.contacts.iter().any(|c| match c {
                    Contact::Overlap(t) => t.same_points_as(&s),
                    _ => false,
                });
                if !seen {
                    self.contacts.push(contact);
                }
            }
        }
    }

    /// Re-tags point contacts on a vertex of `pline`: tangent when the nearest
    /// distinct vertices before and after it lie strictly on the same side of
    /// the other shape, crossing otherwise. `side` orders a vertex against
    /// that shape. Chain ends of open polylines are left as they are.
    fn retag_vertex_touches<F>(&mut self, pline: &Polyline, side: F)
    where
        F: Fn(&Point2d) -> Ordering,
    {
        for contact in &mut self.contacts {
            let (Contact::Crossing(p) | Contact::Tangent(p)) = *contact else {
                continue;
            };
            let Some(i) = pline.points().iter().position(|v| v.approx_eq(&p)) else {
                continue;
            };
            let (Some(prev), Some(next)) = (neighbour(pline, i, false), neighbour(pline, i, true))
            else {
                continue;
            };
            let before = side(&prev);
            *contact = if before != Ordering::Equal && before == side(&next) {
                Contact::Tangent(p)
            } else {
                Contact::Crossing(p)
            };
        }
    }

    /// Drops points already covered by an overlap segment.
    fn finish(self) -> Intersection {
        let overlaps: Vec<Segment> = self
            .contacts
            .iter()
            .filter_map(|c| match c {
                Contact::Overlap(s) => Some(*s),
                _ => None,
            })
            .collect();
        let eps = tolerance();
        let contacts = self
            .contacts
            .into_iter()
            .filter(|c| match c {
                Contact::Crossing(p) | Contact::Tangent(p) => {
                    !overlaps.iter().any(|s| s.distance_to(p) <= eps)
                }
                Contact::Overlap(_) => true,
            })
            .collect();
        Intersection::from_contacts(contacts)
    }
}

/// The nearest vertex before or after vertex `i` that does not coincide with
/// it, wrapping around on closed polylines.
fn neighbour(pline: &Polyline, i: usize, forward: bool) -> Option<Point2d> {
    let pts = pline.points();
    let n = pts.len();
    for k in 1..n {
        let j = if forward {
            if !pline.is_closed() && i + k >= n {
                return None;
            }
            (i + k) % n
        } else {
            if !pline.is_closed() && k > i {
                return None;
            }
            (i + n - k) % n
        };
        if !pts[j].approx_eq(&pts[i]) {
            return Some(pts[j]);
        }
    }
    None
}
