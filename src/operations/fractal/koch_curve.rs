use crate::geometry::{Polyline, Segment};
use crate::math::Point2;

/// Builds the Koch curve between two points at a given recursion level.
///
/// Level 0 is the bare segment. Each further level replaces every segment
/// with four segments one third as long, the middle two forming an
/// equilateral bump counter-clockwise of the segment direction.
pub struct KochCurve {
    segment: Segment,
    level: u32,
}

impl KochCurve {
    /// Creates a new `KochCurve` operation.
    ///
    /// Coincident endpoints are not rejected; they yield a curve whose
    /// points all coincide.
    #[must_use]
    pub fn new(start: Point2, end: Point2, level: u32) -> Self {
        Self {
            segment: Segment::new(start, end),
            level,
        }
    }

    /// Executes the operation.
    ///
    /// The result starts at `start`, ends at `end`, and holds `4^level + 1`
    /// points.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        Polyline::new(koch_points(self.segment, self.level))
    }
}

/// Number of points in a Koch curve of the given level, if it fits in `usize`.
#[must_use]
pub fn curve_point_count(level: u32) -> Option<usize> {
    4_usize.checked_pow(level)?.checked_add(1)
}

fn koch_points(segment: Segment, level: u32) -> Vec<Point2> {
    if level == 0 {
        return vec![segment.start, segment.end];
    }

    let [first, second, third, fourth] = segment.subdivide();
    let mut points = Vec::with_capacity(curve_point_count(level).unwrap_or(0));

    // Each sub-curve's last point is the next one's first; keep it once.
    for part in [first, second, third] {
        let sub = koch_points(part, level - 1);
        points.extend_from_slice(&sub[..sub.len() - 1]);
    }
    points.extend(koch_points(fourth, level - 1));
    points
}
