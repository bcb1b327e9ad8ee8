use super::{tolerance, Point2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y axis pointing up).
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Counts the points that are pairwise distinct within tolerance.
#[must_use]
pub fn count_distinct_2d(points: &[Point2]) -> usize {
    let mut distinct: Vec<&Point2> = Vec::with_capacity(points.len());
    for p in points {
        if !distinct.iter().any(|q| (p - *q).norm() <= tolerance()) {
            distinct.push(p);
        }
    }
    distinct.len()
}

/// Axis-aligned bounds `(min, max)` of a point set, `None` when empty.
#[must_use]
pub fn bounds_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut lo = *first;
    let mut hi = *first;
    for p in &points[1..] {
        lo.x = lo.x.min(p.x);
        lo.y = lo.y.min(p.y);
        hi.x = hi.x.max(p.x);
        hi.y = hi.y.max(p.y);
    }
    Some((lo, hi))
}
