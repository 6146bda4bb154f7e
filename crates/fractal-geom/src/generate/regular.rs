//! Regular-polygon recursion: a scaled copy toward every vertex.
//!
//! For a polygon with centroid `c`, each child is a fresh regular polygon
//! with the parent's side count, radius `|v0 - c| * scale`, and center
//! `c + (v_i - c) * (1 - scale)`. Children always start at angle 0; no
//! rotation accumulates across levels.

use nalgebra::Point2;

use super::{capacity_hint, traverse};
use crate::error::{Result, check_scale};
use crate::polygon::regular_polygon_unchecked;
use crate::{CollectingVisitor, FractalElement, FractalVisitor, Polygon, regular_polygon};

/// Generates the regular-polygon recursion rooted at `polygon`.
///
/// # Errors
/// Rejects `scale` outside `(0, 1)`, fewer than 3 vertices, and non-finite
/// vertices.
pub fn regular(
    polygon: Polygon,
    depth: u32,
    max_depth: u32,
    scale: f64,
) -> Result<Vec<FractalElement<Polygon>>> {
    check_scale(scale)?;
    polygon.validate()?;
    let branching = polygon.len() as u64;
    let mut visitor = CollectingVisitor::with_capacity(capacity_hint(branching, depth, max_depth));
    regular_into(polygon, depth, max_depth, scale, &mut visitor)?;
    Ok(visitor.into_elements())
}

/// Streams the regular-polygon recursion rooted at `polygon` into `visitor`.
pub fn regular_into<V: FractalVisitor<Polygon>>(
    polygon: Polygon,
    depth: u32,
    max_depth: u32,
    scale: f64,
    visitor: &mut V,
) -> Result<()> {
    check_scale(scale)?;
    polygon.validate()?;
    let sides = polygon.len();

    let mut count = 0_usize;
    traverse(
        polygon,
        depth,
        max_depth,
        |p| shrink_toward_vertices(p, scale),
        |p, d| {
            count += 1;
            visitor.visit(FractalElement::new(p, d));
        },
    );

    log::debug!("regular {sides}-gon recursion to depth {max_depth}: {count} polygons");
    Ok(())
}

/// The default root for `sides`: radius 4 around the origin.
pub fn regular_root(sides: usize) -> Result<Polygon> {
    regular_polygon(Point2::origin(), 4.0, sides, 0.0)
}

/// Radius of the children of `polygon`: `|v0 - centroid| * scale`.
///
/// # Panics
/// Panics if `polygon` has no vertices.
pub fn child_radius(polygon: &Polygon, scale: f64) -> f64 {
    let centroid = polygon.centroid();
    (polygon.vertices()[0] - centroid).norm() * scale
}

/// One child per vertex, each pulled toward that vertex.
///
/// # Panics
/// Panics if `polygon` has no vertices.
pub fn shrink_toward_vertices(polygon: &Polygon, scale: f64) -> Vec<Polygon> {
    let sides = polygon.len();
    let centroid = polygon.centroid();
    let radius = child_radius(polygon, scale);

    polygon
        .vertices()
        .iter()
        .map(|v| {
            let center = centroid + (v - centroid) * (1.0 - scale);
            regular_polygon_unchecked(center, radius, sides, 0.0)
        })
        .collect()
}

/// Parallel [`regular`]; returns the same sequence.
#[cfg(feature = "parallel")]
pub fn par_regular(
    polygon: Polygon,
    depth: u32,
    max_depth: u32,
    scale: f64,
) -> Result<Vec<FractalElement<Polygon>>> {
    check_scale(scale)?;
    polygon.validate()?;
    Ok(super::par_traverse(
        polygon,
        depth,
        max_depth,
        &|p: &Polygon| shrink_toward_vertices(p, scale),
        &FractalElement::new,
    ))
}
