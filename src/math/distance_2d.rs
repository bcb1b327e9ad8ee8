use super::{Point2, Vector3};

/// Returns the minimum distance from point `p` to the line segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}

/// Signed distance from `p` to the line `a*x + b*y + c = 0`.
///
/// The coefficients need not be normalized; the result is scaled by `1 / |(a, b)|`.
/// Returns `f64::INFINITY` for a line without a finite normal.
#[must_use]
pub fn point_to_line_signed_dist(p: &Point2, line: &Vector3) -> f64 {
    let n = line.x.hypot(line.y);
    if n == 0.0 {
        return f64::INFINITY;
    }
    (line.x * p.x + line.y * p.y + line.z) / n
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn segment_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = point_to_segment_dist(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(
            &Point2::new(-1.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        // Zero-length segment: distance is point-to-point.
        let o = Point2::new(0.0, 0.0);
        let d = point_to_segment_dist(&Point2::new(3.0, 4.0), &o, &o);
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_unnormalized_coefficients() {
        // 2x + 0y - 4 = 0 is the vertical line x = 2.
        let line = Vector3::new(2.0, 0.0, -4.0);
        let d = point_to_line_signed_dist(&Point2::new(5.0, 7.0), &line);
        assert!((d - 3.0).abs() < TOL, "d={d}");
        let d = point_to_line_signed_dist(&Point2::new(0.0, 7.0), &line);
        assert!((d + 2.0).abs() < TOL, "d={d}");
    }
}
