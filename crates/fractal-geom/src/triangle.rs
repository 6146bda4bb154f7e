//! Triangle representation for the Sierpinski generator.

use nalgebra::{Point2, center};

use crate::error::{Result, check_finite};

/// A triangle in the plane, defined by three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    vertices: [Point2<f64>; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    pub fn new(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Creates a triangle, rejecting NaN or infinite coordinates.
    pub fn try_new(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Result<Self> {
        let triangle = Self::new(a, b, c);
        triangle.check_finite()?;
        Ok(triangle)
    }

    /// The equilateral base triangle drawn by default: the unit triangle
    /// scaled by 8 and shifted by (-4, -2.5).
    pub fn base() -> Self {
        let h = 3.0_f64.sqrt() / 2.0;
        Self::new(
            Point2::new(-4.0, -2.5),
            Point2::new(4.0, -2.5),
            Point2::new(0.0, h * 8.0 - 2.5),
        )
    }

    /// Returns the three vertices of the triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point2<f64>; 3] {
        &self.vertices
    }

    /// Computes the centroid of the triangle.
    pub fn centroid(&self) -> Point2<f64> {
        let [a, b, c] = &self.vertices;
        Point2::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Unsigned area of the triangle.
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        let ab = b - a;
        let ac = c - a;
        (ab.x * ac.y - ab.y * ac.x).abs() / 2.0
    }

    /// Edge midpoints `(v1+v2)/2`, `(v2+v3)/2`, `(v3+v1)/2`.
    pub fn midpoints(&self) -> [Point2<f64>; 3] {
        let [a, b, c] = &self.vertices;
        [center(a, b), center(b, c), center(c, a)]
    }

    /// The three corner sub-triangles; the central one is left out.
    ///
    /// Order: the corner at `v1`, then at `v2`, then at `v3`.
    pub fn corner_triangles(&self) -> [Triangle; 3] {
        let [v1, v2, v3] = self.vertices;
        let [mid1, mid2, mid3] = self.midpoints();
        [
            Triangle::new(v1, mid1, mid3),
            Triangle::new(mid1, v2, mid2),
            Triangle::new(mid3, mid2, v3),
        ]
    }

    pub(crate) fn check_finite(&self) -> Result<()> {
        check_finite(
            "triangle vertex",
            self.vertices.iter().flat_map(|v| v.coords.iter()),
        )
    }
}

impl From<[Point2<f64>; 3]> for Triangle {
    fn from(vertices: [Point2<f64>; 3]) -> Self {
        Self { vertices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn make_triangle(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Triangle {
        Triangle::new(
            Point2::new(a[0], a[1]),
            Point2::new(b[0], b[1]),
            Point2::new(c[0], c[1]),
        )
    }

    #[test]
    fn area_of_right_triangle() {
        let tri = make_triangle([0.0, 0.0], [4.0, 0.0], [0.0, 3.0]);
        assert_relative_eq!(tri.area(), 6.0);
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let tri = make_triangle([0.0, 0.0], [3.0, 0.0], [0.0, 3.0]);
        assert_relative_eq!(tri.centroid(), Point2::new(1.0, 1.0));
    }

    #[test]
    fn corners_leave_out_the_middle() {
        let tri = make_triangle([0.0, 0.0], [2.0, 0.0], [0.0, 2.0]);
        let corners = tri.corner_triangles();

        assert_eq!(corners[0], make_triangle([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]));
        assert_eq!(corners[1], make_triangle([1.0, 0.0], [2.0, 0.0], [1.0, 1.0]));
        assert_eq!(corners[2], make_triangle([0.0, 1.0], [1.0, 1.0], [0.0, 2.0]));

        let total: f64 = corners.iter().map(Triangle::area).sum();
        assert_relative_eq!(total, tri.area() * 0.75);
    }

    #[test]
    fn base_triangle_is_equilateral() {
        let [a, b, c] = *Triangle::base().vertices();
        let ab = (b - a).norm();
        let bc = (c - b).norm();
        let ca = (a - c).norm();
        assert_relative_eq!(ab, 8.0, epsilon = 1e-12);
        assert_relative_eq!(bc, 8.0, epsilon = 1e-12);
        assert_relative_eq!(ca, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn try_new_rejects_nan() {
        let nan = Point2::new(f64::NAN, 0.0);
        assert!(Triangle::try_new(nan, Point2::origin(), Point2::new(1.0, 1.0)).is_err());
    }
}
