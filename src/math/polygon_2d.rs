use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A repeated
/// closing vertex contributes nothing, so open and explicitly closed
/// vertex lists give the same result.
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

/// Sums the lengths of the straight edges between consecutive points.
#[must_use]
pub fn path_length_2d(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Returns the component-wise `(min, max)` corners of a point set,
/// or `None` when it is empty.
#[must_use]
pub fn bounds_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in rest {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}
