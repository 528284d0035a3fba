use std::f64::consts::PI;

use serde::Serialize;

use super::koch_curve::{curve_point_count, KochCurve};
use crate::error::Result;
use crate::geometry::Polyline;
use crate::math::Point2;

/// Number of base edges the snowflake is built on.
pub const HEXAGON_SIDES: u32 = 6;

/// Circumradius of the base hexagon.
pub const HEXAGON_RADIUS: f64 = 1.0;

/// Builds the closed hexagonal Koch snowflake at a given recursion level.
///
/// One Koch curve is built on each edge of a regular hexagon inscribed in the
/// unit circle, traversed counter-clockwise from angle 0. The first point is
/// repeated at the end to close the loop.
pub struct KochSnowflake {
    level: u32,
}

impl KochSnowflake {
    /// Creates a new `KochSnowflake` operation.
    #[must_use]
    pub fn new(level: u32) -> Self {
        Self { level }
    }

    /// Executes the operation, returning `6 * 4^level + 1` points.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let capacity = curve_point_count(self.level)
            .and_then(|n| (n - 1).checked_mul(usize::try_from(HEXAGON_SIDES).ok()?))
            .map_or(0, |n| n + 1);
        let mut points = Vec::with_capacity(capacity);

        for i in 0..HEXAGON_SIDES {
            let curve = KochCurve::new(hexagon_vertex(i), hexagon_vertex(i + 1), self.level)
                .execute();
            // The dropped end point is the next edge's start.
            points.extend_from_slice(&curve.points[..curve.len() - 1]);
        }
        if let Some(&first) = points.first() {
            points.push(first);
        }

        tracing::debug!(level = self.level, points = points.len(), "built snowflake");
        Polyline::new(points)
    }
}

/// Returns the `i`-th vertex of the base hexagon.
#[must_use]
pub fn hexagon_vertex(i: u32) -> Point2 {
    let angle = 2.0 * PI * f64::from(i) / f64::from(HEXAGON_SIDES);
    Point2::new(HEXAGON_RADIUS * angle.cos(), HEXAGON_RADIUS * angle.sin())
}

/// Summary measurements of a generated snowflake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnowflakeStats {
    pub level: u32,
    pub point_count: usize,
    pub perimeter: f64,
    pub area: f64,
    /// `[[min_x, min_y], [max_x, max_y]]`.
    pub bounds: [[f64; 2]; 2],
}

impl SnowflakeStats {
    /// Measures a snowflake polyline.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the polyline is empty.
    pub fn measure(level: u32, snowflake: &Polyline) -> Result<Self> {
        let bb = snowflake.bounds()?;
        Ok(Self {
            level,
            point_count: snowflake.len(),
            perimeter: snowflake.length(),
            area: snowflake.signed_area().abs(),
            bounds: [[bb.min.x, bb.min.y], [bb.max.x, bb.max.y]],
        })
    }
}
