use std::f64::consts::FRAC_PI_3;

use crate::math::{rotate_2d, Point2, Vector2};

/// A directed straight segment from `start` to `end`.
///
/// This is the unit one Koch subdivision step replaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the vector from `start` to `end`.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the two points dividing the segment into equal thirds.
    #[must_use]
    pub fn trisect(&self) -> (Point2, Point2) {
        let delta = self.delta();
        let a = self.start + delta / 3.0;
        let b = self.start + 2.0 * delta / 3.0;
        (a, b)
    }

    /// Returns the apex of the equilateral bump erected on the middle third.
    ///
    /// The bump lies counter-clockwise of the segment direction.
    #[must_use]
    pub fn peak(&self) -> Point2 {
        let (a, b) = self.trisect();
        Self::bump_apex(a, b)
    }

    /// Splits the segment into the four pieces of one Koch step:
    /// `(start, a)`, `(a, peak)`, `(peak, b)`, `(b, end)`.
    #[must_use]
    pub fn subdivide(&self) -> [Segment; 4] {
        let (a, b) = self.trisect();
        let peak = Self::bump_apex(a, b);
        [
            Segment::new(self.start, a),
            Segment::new(a, peak),
            Segment::new(peak, b),
            Segment::new(b, self.end),
        ]
    }

    fn bump_apex(a: Point2, b: Point2) -> Point2 {
        a + rotate_2d(&(b - a), FRAC_PI_3)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn trisect_horizontal() {
        let (a, b) = Segment::new(p(0.0, 0.0), p(3.0, 0.0)).trisect();
        assert_eq!(a, p(1.0, 0.0));
        assert_eq!(b, p(2.0, 0.0));
    }

    #[test]
    fn peak_points_left_of_direction() {
        let peak = Segment::new(p(0.0, 0.0), p(3.0, 0.0)).peak();
        assert_abs_diff_eq!(peak.x, 1.5, epsilon = TOLERANCE);
        assert_abs_diff_eq!(peak.y, 3.0_f64.sqrt() / 2.0, epsilon = TOLERANCE);

        // Reversing the segment flips the bump to the other side.
        let flipped = Segment::new(p(3.0, 0.0), p(0.0, 0.0)).peak();
        assert_abs_diff_eq!(flipped.y, -(3.0_f64.sqrt()) / 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn bump_is_equilateral() {
        let seg = Segment::new(p(-1.0, 2.0), p(5.0, -1.0));
        let (a, b) = seg.trisect();
        let peak = seg.peak();
        let side = (b - a).norm();
        assert_abs_diff_eq!((peak - a).norm(), side, epsilon = TOLERANCE);
        assert_abs_diff_eq!((b - peak).norm(), side, epsilon = TOLERANCE);
    }

    #[test]
    fn subdivide_chains_endpoints() {
        let seg = Segment::new(p(0.0, 0.0), p(1.0, 1.0));
        let parts = seg.subdivide();
        assert_eq!(parts[0].start, seg.start);
        assert_eq!(parts[3].end, seg.end);
        for w in parts.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        assert_eq!(parts[1].end, seg.peak());
    }
}
