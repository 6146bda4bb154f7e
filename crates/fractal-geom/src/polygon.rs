//! Generic polygon representation and the regular polygon builder.

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};

use crate::error::{FractalError, Result, check_finite, check_sides};
use crate::{Square, Triangle};

/// A polygon in the plane, defined by an ordered list of vertices.
///
/// Consecutive vertices form the edges; the last vertex connects back to the
/// first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: Vec<Point2<f64>>,
}

impl Polygon {
    /// Creates a new polygon from a list of vertices.
    pub fn new(vertices: Vec<Point2<f64>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon, rejecting fewer than three vertices and
    /// non-finite coordinates.
    pub fn try_new(vertices: Vec<Point2<f64>>) -> Result<Self> {
        let polygon = Self::new(vertices);
        polygon.validate()?;
        Ok(polygon)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_sides(self.len())?;
        check_finite(
            "polygon vertex",
            self.vertices.iter().flat_map(|v| v.coords.iter()),
        )
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the edges as `(start, end)` pairs, including the
    /// closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the vertex list with the first vertex repeated at the end,
    /// ready for drawing as a line strip.
    pub fn closed_loop(&self) -> Vec<Point2<f64>> {
        let mut points = self.vertices.clone();
        if let Some(&first) = self.vertices.first() {
            points.push(first);
        }
        points
    }

    /// Computes the centroid as the mean of the vertices.
    ///
    /// This matches the area centroid for regular polygons.
    pub fn centroid(&self) -> Point2<f64> {
        let sum: Vector2<f64> = self.vertices.iter().map(|p| p.coords).sum();
        Point2::from(sum / self.vertices.len() as f64)
    }

    /// Signed area by the shoelace formula; positive for counter-clockwise
    /// winding.
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            / 2.0
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

/// Builds a regular polygon with `sides` vertices at angles
/// `rotation + 2πk / sides` around `center`.
pub fn regular_polygon(
    center: Point2<f64>,
    radius: f64,
    sides: usize,
    rotation: f64,
) -> Result<Polygon> {
    check_sides(sides)?;
    check_finite("polygon center", center.coords.iter())?;
    if !radius.is_finite() {
        return Err(FractalError::NonFiniteInput { what: "radius" });
    }
    if radius <= 0.0 {
        return Err(FractalError::NonPositiveRadius { radius });
    }
    Ok(regular_polygon_unchecked(center, radius, sides, rotation))
}

pub(crate) fn regular_polygon_unchecked(
    center: Point2<f64>,
    radius: f64,
    sides: usize,
    rotation: f64,
) -> Polygon {
    let vertices = (0..sides)
        .map(|k| {
            let angle = TAU / sides as f64 * k as f64 + rotation;
            Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect();
    Polygon::new(vertices)
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        Self {
            vertices: triangle.vertices().to_vec(),
        }
    }
}

impl From<&Triangle> for Polygon {
    fn from(triangle: &Triangle) -> Self {
        Self {
            vertices: triangle.vertices().to_vec(),
        }
    }
}

impl From<Square> for Polygon {
    fn from(square: Square) -> Self {
        Self {
            vertices: square.vertices().to_vec(),
        }
    }
}

impl From<&Square> for Polygon {
    fn from(square: &Square) -> Self {
        Self {
            vertices: square.vertices().to_vec(),
        }
    }
}
