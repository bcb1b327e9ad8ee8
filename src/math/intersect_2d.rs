use super::{tolerance, Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Parallelism is decided on the sine of the angle between the directions.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    let scale = d1.norm() * d2.norm();
    if scale <= tolerance() || (cross / scale).abs() <= tolerance() {
        return None;
    }
    let delta = p2 - p1;
    let t = delta.perp(d2) / cross;
    let u = delta.perp(d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D for non-parallel segments.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    // Small epsilon in parameter space to include endpoints.
    let eps = param_tolerance(da.norm()).max(param_tolerance(db.norm()));
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((point_at(a0, &da, t_clamped), t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Overlap of two collinear segments, as a parameter interval on segment `a`.
///
/// Returns `None` when the segments are not collinear or do not overlap.
/// A single shared endpoint yields a zero-length interval `(t, t)`.
#[must_use]
pub fn collinear_overlap_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(f64, f64)> {
    let da = a1 - a0;
    let len_sq = da.norm_squared();
    let len = len_sq.sqrt();
    if len <= tolerance() {
        return None;
    }
    // Both endpoints of `b` must lie on the supporting line of `a`.
    let off0 = da.perp(&(b0 - a0)) / len;
    let off1 = da.perp(&(b1 - a0)) / len;
    if off0.abs() > tolerance() || off1.abs() > tolerance() {
        return None;
    }

    let s0 = da.dot(&(b0 - a0)) / len_sq;
    let s1 = da.dot(&(b1 - a0)) / len_sq;
    let lo = s0.min(s1).max(0.0);
    let hi = s0.max(s1).min(1.0);
    let eps = param_tolerance(len);
    if hi < lo - eps {
        return None;
    }
    if hi < lo {
        // Touching within tolerance: collapse to one parameter.
        let mid = 0.5 * (lo + hi);
        return Some((mid, mid));
    }
    Some((lo, hi))
}

/// A root of a segment against a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleHit {
    pub point: Point2,
    /// Parameter on the segment, in `[0, 1]`.
    pub t: f64,
    /// The supporting line touches the circle instead of crossing it.
    pub tangent: bool,
}

/// Bounded segment-circle intersection in 2D, ordered by ascending `t`.
///
/// The segment `a0 + t * (a1 - a0)` is substituted into the circle equation
/// and solved in its own parameter, so the tolerance is independent of the
/// distance from the origin. Hits within tolerance of an endpoint return that
/// endpoint exactly. A zero-length segment hits when its point lies on the
/// circle.
#[must_use]
pub fn segment_circle_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    center: &Point2,
    radius: f64,
) -> Vec<CircleHit> {
    let eps = tolerance();
    let d = a1 - a0;
    let len = d.norm();
    let f = a0 - center;
    if len <= eps {
        return if (f.norm() - radius).abs() <= eps {
            vec![CircleHit {
                point: *a0,
                t: 0.0,
                tangent: false,
            }]
        } else {
            Vec::new()
        };
    }

    let dir = d / len;
    // Distance from the center to the supporting line, and the foot along the segment.
    let h = dir.perp(&f).abs();
    let foot = -f.dot(&dir);
    let roots = if (h - radius).abs() <= eps {
        vec![(foot, true)]
    } else if h < radius {
        let half = ((radius - h) * (radius + h)).sqrt();
        vec![(foot - half, false), (foot + half, false)]
    } else {
        return Vec::new();
    };

    let t_eps = param_tolerance(len);
    roots
        .into_iter()
        .map(|(s, tangent)| (s / len, tangent))
        .filter(|(t, _)| (-t_eps..=1.0 + t_eps).contains(t))
        .map(|(t, tangent)| {
            let (point, t) = if t <= t_eps {
                (*a0, 0.0)
            } else if t >= 1.0 - t_eps {
                (*a1, 1.0)
            } else {
                (point_at(a0, &d, t), t)
            };
            CircleHit { point, t, tangent }
        })
        .collect()
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

/// Converts the absolute tolerance into parameter space for a segment of length `len`.
#[must_use]
pub fn param_tolerance(len: f64) -> f64 {
    if len <= tolerance() {
        tolerance()
    } else {
        tolerance() / len
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::DEFAULT_TOLERANCE;

    #[test]
    fn line_line_perpendicular() {
        let p1 = Point2::new(0.0, 0.0);
        let d1 = Vector2::new(1.0, 0.0);
        let p2 = Point2::new(0.5, -1.0);
        let d2 = Vector2::new(0.0, 1.0);
        let (t, u) = line_line_intersect_2d(&p1, &d1, &p2, &d2).unwrap();
        assert!((t - 0.5).abs() < DEFAULT_TOLERANCE);
        assert!((u - 1.0).abs() < DEFAULT_TOLERANCE);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let p1 = Point2::new(0.0, 0.0);
        let d1 = Vector2::new(1.0, 0.0);
        let p2 = Point2::new(0.0, 1.0);
        let d2 = Vector2::new(300.0, 0.0);
        assert!(line_line_intersect_2d(&p1, &d1, &p2, &d2).is_none());
    }

    #[test]
    fn segment_segment_crossing() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(2.0, 2.0);
        let b0 = Point2::new(0.0, 2.0);
        let b1 = Point2::new(2.0, 0.0);
        let (pt, t, u) = segment_segment_intersect_2d(&a0, &a1, &b0, &b1).unwrap();
        assert!((pt.x - 1.0).abs() < DEFAULT_TOLERANCE);
        assert!((pt.y - 1.0).abs() < DEFAULT_TOLERANCE);
        assert!((t - 0.5).abs() < DEFAULT_TOLERANCE);
        assert!((u - 0.5).abs() < DEFAULT_TOLERANCE);
    }

    #[test]
    fn segment_segment_shared_endpoint() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b1 = Point2::new(1.0, 1.0);
        let (pt, t, u) = segment_segment_intersect_2d(&a0, &a1, &a1, &b1).unwrap();
        assert!((pt.x - 1.0).abs() < DEFAULT_TOLERANCE);
        assert!((t - 1.0).abs() < DEFAULT_TOLERANCE);
        assert!(u.abs() < DEFAULT_TOLERANCE);
    }

    #[test]
    fn segment_segment_no_crossing() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(0.0, 1.0);
        let b1 = Point2::new(1.0, 1.0);
        assert!(segment_segment_intersect_2d(&a0, &a1, &b0, &b1).is_none());
    }

    #[test]
    fn collinear_overlap_partial() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(4.0, 0.0);
        let b0 = Point2::new(6.0, 0.0);
        let b1 = Point2::new(2.0, 0.0);
        let (lo, hi) = collinear_overlap_2d(&a0, &a1, &b0, &b1).unwrap();
        assert!((lo - 0.5).abs() < DEFAULT_TOLERANCE);
        assert!((hi - 1.0).abs() < DEFAULT_TOLERANCE);
    }

    #[test]
    fn collinear_overlap_disjoint_and_offset() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let (far0, far1) = (Point2::new(2.0, 0.0), Point2::new(3.0, 0.0));
        assert!(collinear_overlap_2d(&a0, &a1, &far0, &far1).is_none());
        let (up0, up1) = (Point2::new(0.0, 1.0), Point2::new(1.0, 1.0));
        assert!(collinear_overlap_2d(&a0, &a1, &up0, &up1).is_none());
    }

    #[test]
    fn collinear_overlap_touching() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let (lo, hi) =
            collinear_overlap_2d(&a0, &a1, &Point2::new(1.0, 0.0), &Point2::new(2.0, 0.0)).unwrap();
        assert!((lo - 1.0).abs() < DEFAULT_TOLERANCE);
        assert!((hi - 1.0).abs() < DEFAULT_TOLERANCE);
    }

    #[test]
    fn segment_circle_two_roots_in_segment_order() {
        let center = Point2::new(0.0, 0.0);
        let a0 = Point2::new(3.0, 0.0);
        let a1 = Point2::new(-3.0, 0.0);
        let hits = segment_circle_intersect_2d(&a0, &a1, &center, 1.0);
        assert_eq!(hits.len(), 2);
        assert!((hits[0].point.x - 1.0).abs() < DEFAULT_TOLERANCE);
        assert!((hits[1].point.x + 1.0).abs() < DEFAULT_TOLERANCE);
        assert!(hits[0].t < hits[1].t);
        assert!(hits.iter().all(|h| !h.tangent));
    }

    #[test]
    fn segment_circle_tangent_and_miss() {
        let center = Point2::new(0.0, 0.0);
        let a0 = Point2::new(-2.0, 1.0);
        let a1 = Point2::new(2.0, 1.0);
        let hits = segment_circle_intersect_2d(&a0, &a1, &center, 1.0);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].tangent);
        assert!((hits[0].t - 0.5).abs() < DEFAULT_TOLERANCE);
        assert!(segment_circle_intersect_2d(&a0, &a1, &center, 0.5).is_empty());
    }

    #[test]
    fn segment_circle_endpoint_is_exact() {
        let center = Point2::new(0.0, 0.0);
        let a0 = Point2::new(1.0, 0.0);
        let a1 = Point2::new(5.0, 0.0);
        let hits = segment_circle_intersect_2d(&a0, &a1, &center, 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].point, a0);
        assert!(hits[0].t.abs() < f64::EPSILON);
        let point = segment_circle_intersect_2d(&a0, &a0, &center, 1.0);
        assert_eq!(point.len(), 1);
    }

    #[test]
    fn segment_circle_far_from_origin() {
        for base in [1e2, 1e5, 1e6] {
            let center = Point2::new(base + 0.25, base - 0.5);
            let a0 = Point2::new(base - 50.0, base - 40.0);
            let a1 = Point2::new(base + 50.0, base + 40.0);
            let hits = segment_circle_intersect_2d(&a0, &a1, &center, 20.0);
            assert_eq!(hits.len(), 2, "base {base}");
            for h in &hits {
                assert!(((h.point - center).norm() - 20.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn point_at_interpolation() {
        let origin = Point2::new(1.0, 2.0);
        let dir = Vector2::new(4.0, 6.0);
        let pt = point_at(&origin, &dir, 0.5);
        assert!((pt.x - 3.0).abs() < DEFAULT_TOLERANCE);
        assert!((pt.y - 5.0).abs() < DEFAULT_TOLERANCE);
    }
}
