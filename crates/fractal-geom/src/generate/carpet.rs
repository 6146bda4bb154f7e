//! Sierpinski carpet: keep the eight outer cells of a 3x3 grid.

use nalgebra::Point2;

use super::{capacity_hint, traverse};
use crate::error::{Result, check_finite, check_size};
use crate::{CollectingVisitor, FractalElement, FractalVisitor, Polygon, Square};

/// Squares per subdivision.
pub const CARPET_BRANCHING: u64 = 8;

/// Generates the Sierpinski carpet over the square with lower-left corner
/// `(x, y)` and side `size`.
///
/// # Errors
/// Rejects a non-positive or non-finite `size` and non-finite corners.
pub fn carpet(
    x: f64,
    y: f64,
    size: f64,
    depth: u32,
    max_depth: u32,
) -> Result<Vec<FractalElement<Polygon>>> {
    let mut visitor =
        CollectingVisitor::with_capacity(capacity_hint(CARPET_BRANCHING, depth, max_depth));
    carpet_into(Square::new(Point2::new(x, y), size), depth, max_depth, &mut visitor)?;
    Ok(visitor.into_elements())
}

/// Streams the carpet over `square` into `visitor`.
pub fn carpet_into<V: FractalVisitor<Polygon>>(
    square: Square,
    depth: u32,
    max_depth: u32,
    visitor: &mut V,
) -> Result<()> {
    check_finite("square origin", square.origin().coords.iter())?;
    check_size(square.size())?;

    let mut count = 0_usize;
    traverse(square, depth, max_depth, Square::carpet_cells, |s, d| {
        count += 1;
        visitor.visit(FractalElement::new(Polygon::from(s), d));
    });

    log::debug!("sierpinski carpet to depth {max_depth}: {count} squares");
    Ok(())
}

/// Parallel [`carpet`]; returns the same sequence.
#[cfg(feature = "parallel")]
pub fn par_carpet(
    x: f64,
    y: f64,
    size: f64,
    depth: u32,
    max_depth: u32,
) -> Result<Vec<FractalElement<Polygon>>> {
    let square = Square::try_new(Point2::new(x, y), size)?;
    Ok(super::par_traverse(
        square,
        depth,
        max_depth,
        &|s: &Square| s.carpet_cells().to_vec(),
        &|s: Square, d: u32| FractalElement::new(Polygon::from(s), d),
    ))
}
