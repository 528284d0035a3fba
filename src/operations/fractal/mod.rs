mod koch_curve;
mod koch_snowflake;
mod level;

pub use koch_curve::{curve_point_count, KochCurve};
pub use koch_snowflake::{
    hexagon_vertex, KochSnowflake, SnowflakeStats, HEXAGON_RADIUS, HEXAGON_SIDES,
};
pub use level::RecursionLevel;

use crate::geometry::Polyline;
use crate::math::Point2;

/// Shorthand for [`KochCurve::new`] followed by [`KochCurve::execute`].
#[must_use]
pub fn build_curve(start: Point2, end: Point2, level: u32) -> Polyline {
    KochCurve::new(start, end, level).execute()
}

/// Shorthand for [`KochSnowflake::new`] followed by [`KochSnowflake::execute`].
#[must_use]
pub fn build_snowflake(level: u32) -> Polyline {
    KochSnowflake::new(level).execute()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn build_curve_level_one_scenario() {
        let curve = build_curve(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0), 1);
        assert_eq!(curve.len(), 5);
        assert_eq!(curve.points[0], Point2::new(0.0, 0.0));
        assert_eq!(curve.points[1], Point2::new(1.0, 0.0));
        assert_abs_diff_eq!(curve.points[2].x, 1.5, epsilon = TOLERANCE);
        assert_abs_diff_eq!(curve.points[2].y, 3.0_f64.sqrt() / 2.0, epsilon = TOLERANCE);
        assert_eq!(curve.points[3], Point2::new(2.0, 0.0));
        assert_eq!(curve.points[4], Point2::new(3.0, 0.0));
    }

    #[test]
    fn build_snowflake_matches_operation() {
        assert_eq!(build_snowflake(2), KochSnowflake::new(2).execute());
    }
}
