//! Nested cube fractal: every cube splits into its 8 octants.

use nalgebra::Point3;

use super::{capacity_hint, traverse};
use crate::error::Result;
use crate::{CollectingVisitor, Cube, FractalElement, FractalVisitor};

/// Cubes per subdivision.
pub const CUBE_BRANCHING: u64 = 8;

/// Subdivides the cube at `origin` with edge `size`, starting at `depth`.
///
/// Emits the current cube first, then each octant subtree one level deeper,
/// until `max_depth`. A starting depth past `max_depth` yields no elements.
///
/// # Errors
/// Rejects a non-positive or non-finite `size` and non-finite `origin`.
pub fn subdivide(
    origin: Point3<f64>,
    size: f64,
    depth: u32,
    max_depth: u32,
) -> Result<Vec<FractalElement<Cube>>> {
    let mut visitor =
        CollectingVisitor::with_capacity(capacity_hint(CUBE_BRANCHING, depth, max_depth));
    subdivide_into(Cube::new(origin, size), depth, max_depth, &mut visitor)?;
    Ok(visitor.into_elements())
}

/// Streams the subdivision of `cube` into `visitor`.
pub fn subdivide_into<V: FractalVisitor<Cube>>(
    cube: Cube,
    depth: u32,
    max_depth: u32,
    visitor: &mut V,
) -> Result<()> {
    let cube = Cube::try_new(cube.origin(), cube.size())?;

    let mut count = 0_usize;
    traverse(cube, depth, max_depth, Cube::children, |c, d| {
        count += 1;
        visitor.visit(FractalElement::new(c, d));
    });

    log::debug!("cube subdivision to depth {max_depth}: {count} cubes");
    Ok(())
}

/// Parallel [`subdivide`]; returns the same sequence.
#[cfg(feature = "parallel")]
pub fn par_subdivide(
    origin: Point3<f64>,
    size: f64,
    depth: u32,
    max_depth: u32,
) -> Result<Vec<FractalElement<Cube>>> {
    let cube = Cube::try_new(origin, size)?;
    let elements = super::par_traverse(
        cube,
        depth,
        max_depth,
        &|c: &Cube| c.children().to_vec(),
        &FractalElement::new,
    );
    log::debug!(
        "parallel cube subdivision to depth {max_depth}: {} cubes",
        elements.len()
    );
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FractalError;
    use crate::generate::element_count;

    #[test]
    fn single_cube_at_depth_zero() {
        let cubes = subdivide(Point3::origin(), 10.0, 0, 0).unwrap();
        assert_eq!(cubes.len(), 1);
        assert_eq!(cubes[0].depth(), 0);
        assert_eq!(cubes[0].shape().size(), 10.0);
    }

    #[test]
    fn counts_follow_closed_form() {
        for max_depth in 0..4 {
            let cubes = subdivide(Point3::origin(), 1.0, 0, max_depth).unwrap();
            assert_eq!(
                Some(cubes.len() as u64),
                element_count(CUBE_BRANCHING, max_depth)
            );
        }
    }

    #[test]
    fn first_child_follows_root() {
        let cubes = subdivide(Point3::origin(), 8.0, 0, 2).unwrap();
        assert_eq!(cubes[1].depth(), 1);
        assert_eq!(cubes[1].shape().origin(), Point3::origin());
        assert_eq!(cubes[1].shape().size(), 4.0);
        // The first grandchild precedes the second child.
        assert_eq!(cubes[2].depth(), 2);
        assert_eq!(cubes[2].shape().size(), 2.0);
    }

    #[test]
    fn starting_depth_shortens_the_walk() {
        let cubes = subdivide(Point3::origin(), 1.0, 2, 3).unwrap();
        assert_eq!(cubes.len(), 9);
        assert_eq!(cubes[0].depth(), 2);
        assert!(subdivide(Point3::origin(), 1.0, 4, 3).unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_size() {
        assert_eq!(
            subdivide(Point3::origin(), 0.0, 0, 1),
            Err(FractalError::NonPositiveSize { size: 0.0 })
        );
        assert!(subdivide(Point3::origin(), -3.0, 0, 1).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let seq = subdivide(Point3::new(1.0, 2.0, 3.0), 6.0, 0, 3).unwrap();
        let par = par_subdivide(Point3::new(1.0, 2.0, 3.0), 6.0, 0, 3).unwrap();
        assert_eq!(seq, par);
    }
}
