//! Sierpinski triangle: keep the three corner triangles, drop the middle.

use super::{capacity_hint, traverse};
use crate::error::Result;
use crate::{CollectingVisitor, FractalElement, FractalVisitor, Polygon, Triangle};

/// Triangles per subdivision.
pub const SIERPINSKI_BRANCHING: u64 = 3;

/// Generates the Sierpinski triangle rooted at `triangle`.
///
/// # Errors
/// Rejects non-finite vertices.
pub fn sierpinski(
    triangle: Triangle,
    depth: u32,
    max_depth: u32,
) -> Result<Vec<FractalElement<Polygon>>> {
    let mut visitor =
        CollectingVisitor::with_capacity(capacity_hint(SIERPINSKI_BRANCHING, depth, max_depth));
    sierpinski_into(triangle, depth, max_depth, &mut visitor)?;
    Ok(visitor.into_elements())
}

/// Streams the Sierpinski triangle rooted at `triangle` into `visitor`.
pub fn sierpinski_into<V: FractalVisitor<Polygon>>(
    triangle: Triangle,
    depth: u32,
    max_depth: u32,
    visitor: &mut V,
) -> Result<()> {
    triangle.check_finite()?;

    let mut count = 0_usize;
    traverse(triangle, depth, max_depth, Triangle::corner_triangles, |t, d| {
        count += 1;
        visitor.visit(FractalElement::new(Polygon::from(t), d));
    });

    log::debug!("sierpinski triangle to depth {max_depth}: {count} triangles");
    Ok(())
}

/// Parallel [`sierpinski`]; returns the same sequence.
#[cfg(feature = "parallel")]
pub fn par_sierpinski(
    triangle: Triangle,
    depth: u32,
    max_depth: u32,
) -> Result<Vec<FractalElement<Polygon>>> {
    triangle.check_finite()?;
    Ok(super::par_traverse(
        triangle,
        depth,
        max_depth,
        &|t: &Triangle| t.corner_triangles().to_vec(),
        &|t: Triangle, d: u32| FractalElement::new(Polygon::from(t), d),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn depth_one_has_root_and_three_corners() {
        let elements = sierpinski(Triangle::base(), 0, 1).unwrap();
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[0].depth(), 0);
        assert!(elements[1..].iter().all(|e| e.depth() == 1));
    }

    #[test]
    fn root_is_emitted_unchanged() {
        let base = Triangle::base();
        let elements = sierpinski(base, 0, 2).unwrap();
        assert_eq!(*elements[0].shape(), Polygon::from(base));
    }

    #[test]
    fn rejects_non_finite_vertices() {
        let tri = Triangle::new(
            Point2::new(0.0, f64::NAN),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        assert!(sierpinski(tri, 0, 2).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let seq = sierpinski(Triangle::base(), 0, 5).unwrap();
        let par = par_sierpinski(Triangle::base(), 0, 5).unwrap();
        assert_eq!(seq, par);
    }
}
