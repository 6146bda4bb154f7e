//! Recursive fractal geometry: nested cubes, Sierpinski triangles and
//! carpets, and regular-polygon recursions.
//!
//! Every generator is a pure function of a root shape, a depth range, and
//! its parameters. It produces the visited shapes in pre-order as
//! [`FractalElement`]s, each paired with its recursion depth. Rendering is
//! left to the caller; a [`StylePolicy`] turns depths into whatever style
//! tags the renderer understands.
//!
//! # Example
//!
//! ```
//! use fractal_geom::{DepthGradient, Triangle, sierpinski, style_all};
//!
//! let elements = sierpinski(Triangle::base(), 0, 2).unwrap();
//! assert_eq!(elements.len(), 13);
//!
//! let styled = style_all(elements, &mut DepthGradient::new(2));
//! assert_eq!(*styled[0].tag(), 0.0);
//! ```

pub mod config;
mod cube;
mod element;
mod error;
pub mod generate;
mod polygon;
mod square;
mod style;
mod triangle;

pub use config::{CubeFractalConfig, PolygonAlgorithm, PolygonFractalConfig, Preset};
pub use cube::{CUBE_EDGES, CUBE_FACES, Cube, CubeDrawOptions, CubeGeometry, Segment3};
pub use element::{CollectingVisitor, FnVisitor, FractalElement, FractalVisitor, style_all};
pub use error::{FractalError, Result};
pub use generate::carpet::{carpet, carpet_into};
pub use generate::cube::{subdivide, subdivide_into};
pub use generate::element_count;
pub use generate::regular::{regular, regular_into, regular_root};
pub use generate::sierpinski::{sierpinski, sierpinski_into};
pub use polygon::{Polygon, regular_polygon};
pub use square::Square;
pub use style::{DepthGradient, FnPolicy, LevelCycle, RandomChoice, StylePolicy, Uniform};
pub use triangle::Triangle;

#[cfg(feature = "parallel")]
pub use generate::{
    carpet::par_carpet, cube::par_subdivide, regular::par_regular, sierpinski::par_sierpinski,
};
