//! Axis-aligned square representation for the Sierpinski carpet.

use nalgebra::{Point2, Vector2};

use crate::error::{Result, check_finite, check_size};

/// An axis-aligned square, defined by its lower-left corner and side length.
///
/// The four vertices are:
/// - `origin`
/// - `origin + (size, 0)`
/// - `origin + (size, size)`
/// - `origin + (0, size)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    origin: Point2<f64>,
    size: f64,
}

impl Square {
    /// Creates a new square from its lower-left corner and side length.
    pub fn new(origin: Point2<f64>, size: f64) -> Self {
        Self { origin, size }
    }

    /// Creates a square, rejecting non-finite coordinates and non-positive sizes.
    pub fn try_new(origin: Point2<f64>, size: f64) -> Result<Self> {
        check_finite("square origin", origin.coords.iter())?;
        check_size(size)?;
        Ok(Self::new(origin, size))
    }

    /// The carpet root drawn by default: side 8, lower-left corner at (-4, -4).
    pub fn base() -> Self {
        Self::new(Point2::new(-4.0, -4.0), 8.0)
    }

    /// Returns the lower-left corner of the square.
    #[inline]
    pub fn origin(&self) -> Point2<f64> {
        self.origin
    }

    /// Returns the side length.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the four vertices in counter-clockwise order.
    pub fn vertices(&self) -> [Point2<f64>; 4] {
        let s = self.size;
        [
            self.origin,
            self.origin + Vector2::new(s, 0.0),
            self.origin + Vector2::new(s, s),
            self.origin + Vector2::new(0.0, s),
        ]
    }

    /// Computes the center of the square.
    pub fn centroid(&self) -> Point2<f64> {
        self.origin + Vector2::repeat(self.size * 0.5)
    }

    /// Computes the area of the square.
    pub fn area(&self) -> f64 {
        self.size * self.size
    }

    /// The eight outer cells of the 3x3 grid over this square.
    ///
    /// Cells are ordered with the x index outermost; the center cell
    /// `(1, 1)` is skipped.
    pub fn carpet_cells(&self) -> [Square; 8] {
        let third = self.size / 3.0;
        let mut cells = [*self; 8];
        let mut n = 0;
        for i in 0..3 {
            for j in 0..3 {
                if i == 1 && j == 1 {
                    continue;
                }
                let offset = Vector2::new(i as f64 * third, j as f64 * third);
                cells[n] = Square::new(self.origin + offset, third);
                n += 1;
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vertices_are_counter_clockwise() {
        let sq = Square::new(Point2::new(1.0, 2.0), 3.0);
        assert_eq!(
            sq.vertices(),
            [
                Point2::new(1.0, 2.0),
                Point2::new(4.0, 2.0),
                Point2::new(4.0, 5.0),
                Point2::new(1.0, 5.0),
            ]
        );
    }

    #[test]
    fn carpet_cells_skip_center() {
        let sq = Square::new(Point2::new(0.0, 0.0), 9.0);
        let cells = sq.carpet_cells();
        let center = sq.centroid();

        for cell in &cells {
            assert_relative_eq!(cell.size(), 3.0);
            assert_ne!(cell.centroid(), center);
        }
        assert_eq!(cells[0].origin(), Point2::new(0.0, 0.0));
        assert_eq!(cells[3].origin(), Point2::new(3.0, 0.0));
        assert_eq!(cells[4].origin(), Point2::new(3.0, 6.0));
        assert_eq!(cells[7].origin(), Point2::new(6.0, 6.0));
    }

    #[test]
    fn try_new_validates() {
        assert!(Square::try_new(Point2::origin(), 1.0).is_ok());
        assert!(Square::try_new(Point2::origin(), 0.0).is_err());
        assert!(Square::try_new(Point2::new(f64::INFINITY, 0.0), 1.0).is_err());
    }
}
