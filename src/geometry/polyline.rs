use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{bounds_2d, path_length_2d, signed_area_2d};
use crate::math::Point2;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// An ordered sequence of points joined by straight edges.
///
/// Used both for open Koch curves and for the closed snowflake, where the
/// first point is repeated at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Returns `true` if the polyline has at least two points and its last
    /// point equals its first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Total length of all edges.
    #[must_use]
    pub fn length(&self) -> f64 {
        path_length_2d(&self.points)
    }

    /// Signed enclosed area, positive for counter-clockwise winding.
    ///
    /// Only meaningful for closed polylines.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the polyline has no points.
    pub fn bounds(&self) -> Result<Aabb2> {
        let (min, max) = bounds_2d(&self.points)
            .ok_or_else(|| GeometryError::Degenerate("bounds of an empty polyline".into()))?;
        Ok(Aabb2 { min, max })
    }

    /// Splits the vertices into separate x and y coordinate columns.
    #[must_use]
    pub fn columns(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }
}
