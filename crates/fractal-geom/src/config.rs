//! # Configuration
//!
//! Bounds, defaults, and named presets for fractal runs.
//!
//! ## Categories
//!
//! - **Cube runs**: depth bounds and the default root cube
//! - **Polygon runs**: depth and side-count bounds
//! - **Presets**: the named polygon fractals offered by default

use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;
use thiserror::Error;

use crate::error::{FractalError, Result, check_scale};
use crate::generate::carpet::carpet;
use crate::generate::cube::subdivide;
use crate::generate::regular::{regular, regular_root};
use crate::generate::sierpinski::sierpinski;
use crate::{Cube, CubeDrawOptions, CubeGeometry, FractalElement, Polygon, Square, Triangle};

// =============================================================================
// CUBE BOUNDS
// =============================================================================

/// Smallest supported cube max depth.
pub const CUBE_MIN_DEPTH: u32 = 0;

/// Largest supported cube max depth (8^7 - 1) / 7 = 299,593 cubes.
pub const CUBE_MAX_DEPTH: u32 = 6;

/// Default cube max depth.
pub const CUBE_DEFAULT_DEPTH: u32 = 3;

/// Edge length of the default root cube, placed at the origin.
pub const CUBE_DEFAULT_SIZE: f64 = 10.0;

// =============================================================================
// POLYGON BOUNDS
// =============================================================================

/// Smallest supported polygon max depth.
pub const POLYGON_MIN_DEPTH: u32 = 1;

/// Largest supported polygon max depth.
pub const POLYGON_MAX_DEPTH: u32 = 7;

/// Largest supported side count.
pub const MAX_SIDES: usize = 8;

fn check_depth(depth: u32, min: u32, max: u32) -> Result<()> {
    if (min..=max).contains(&depth) {
        Ok(())
    } else {
        log::trace!("rejected max depth {depth}");
        Err(FractalError::DepthOutOfRange { depth, min, max })
    }
}

// =============================================================================
// CUBE RUNS
// =============================================================================

/// Settings for a nested cube run from the default root cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeFractalConfig {
    /// Deepest level to subdivide to.
    pub max_depth: u32,
    /// Primitives to draw for each cube.
    pub draw: CubeDrawOptions,
}

impl Default for CubeFractalConfig {
    fn default() -> Self {
        Self {
            max_depth: CUBE_DEFAULT_DEPTH,
            draw: CubeDrawOptions::default(),
        }
    }
}

impl CubeFractalConfig {
    /// The default root: edge [`CUBE_DEFAULT_SIZE`] at the origin.
    pub fn root() -> Cube {
        Cube::new(Point3::origin(), CUBE_DEFAULT_SIZE)
    }

    /// Checks the depth bounds.
    pub fn validate(&self) -> Result<()> {
        check_depth(self.max_depth, CUBE_MIN_DEPTH, CUBE_MAX_DEPTH)
    }

    /// Generates the cubes of this run.
    pub fn generate(&self) -> Result<Vec<FractalElement<Cube>>> {
        self.validate()?;
        let root = Self::root();
        subdivide(root.origin(), root.size(), 0, self.max_depth)
    }

    /// Generates the cubes and expands each into its drawable primitives.
    pub fn generate_geometry(&self) -> Result<Vec<FractalElement<CubeGeometry>>> {
        let draw = self.draw;
        Ok(self
            .generate()?
            .into_iter()
            .map(|e| e.map_shape(|cube| cube.geometry(draw)))
            .collect())
    }
}

// =============================================================================
// POLYGON RUNS
// =============================================================================

/// Which polygon recursion to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PolygonAlgorithm {
    /// Corner triangles of a triangle.
    #[default]
    Sierpinski,
    /// Outer cells of a 3x3 grid.
    Carpet,
    /// Scaled regular polygons toward each vertex.
    Regular,
}

impl PolygonAlgorithm {
    /// All algorithms.
    pub const ALL: [Self; 3] = [Self::Sierpinski, Self::Carpet, Self::Regular];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Sierpinski => "sierpinski",
            Self::Carpet => "carpet",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for PolygonAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An algorithm name that matched none of [`PolygonAlgorithm::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown polygon algorithm {0:?}, expected sierpinski, carpet or regular")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for PolygonAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}

/// Settings for a polygon fractal run.
///
/// The Sierpinski recursion only applies to triangles and the carpet only to
/// squares; any other pairing falls back to the regular-polygon recursion
/// with the configured side count and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonFractalConfig {
    /// Vertex count of the root polygon.
    pub sides: usize,
    /// Deepest level to recurse to.
    pub max_depth: u32,
    /// Child shrink ratio for the regular-polygon recursion.
    pub scale: f64,
    /// Requested algorithm.
    pub algorithm: PolygonAlgorithm,
}

impl Default for PolygonFractalConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

impl PolygonFractalConfig {
    /// The algorithm that will actually run.
    pub fn resolved_algorithm(&self) -> PolygonAlgorithm {
        match (self.algorithm, self.sides) {
            (PolygonAlgorithm::Sierpinski, 3) => PolygonAlgorithm::Sierpinski,
            (PolygonAlgorithm::Carpet, 4) => PolygonAlgorithm::Carpet,
            _ => PolygonAlgorithm::Regular,
        }
    }

    /// Checks side count and depth bounds, and the scale when the
    /// regular-polygon recursion will run.
    pub fn validate(&self) -> Result<()> {
        if self.sides < 3 {
            return Err(FractalError::TooFewSides { sides: self.sides });
        }
        if self.sides > MAX_SIDES {
            return Err(FractalError::TooManySides {
                sides: self.sides,
                max: MAX_SIDES,
            });
        }
        check_depth(self.max_depth, POLYGON_MIN_DEPTH, POLYGON_MAX_DEPTH)?;
        if self.resolved_algorithm() == PolygonAlgorithm::Regular {
            check_scale(self.scale)?;
        }
        Ok(())
    }

    /// Generates the polygons of this run from the default root shape.
    pub fn generate(&self) -> Result<Vec<FractalElement<Polygon>>> {
        self.validate()?;
        let max_depth = self.max_depth;
        let algorithm = self.resolved_algorithm();
        if algorithm != self.algorithm {
            log::debug!(
                "{} needs a different side count than {}, running {algorithm}",
                self.algorithm,
                self.sides
            );
        }

        match algorithm {
            PolygonAlgorithm::Sierpinski => sierpinski(Triangle::base(), 0, max_depth),
            PolygonAlgorithm::Carpet => {
                let base = Square::base();
                carpet(base.origin().x, base.origin().y, base.size(), 0, max_depth)
            }
            PolygonAlgorithm::Regular => {
                regular(regular_root(self.sides)?, 0, max_depth, self.scale)
            }
        }
    }
}

// =============================================================================
// PRESETS
// =============================================================================

/// Named polygon fractal settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preset {
    /// Triangle, depth 5.
    #[default]
    SierpinskiTriangle,
    /// Square, depth 4.
    SierpinskiCarpet,
    /// Pentagon, depth 3, scale 0.38.
    Pentagon,
    /// Hexagon, depth 3, scale 0.35.
    Hexagon,
    /// Square regular recursion, depth 3, scale 0.5; the starting point for
    /// hand-tuned settings.
    Custom,
}

impl Preset {
    /// All presets, in menu order.
    pub const ALL: [Self; 5] = [
        Self::SierpinskiTriangle,
        Self::SierpinskiCarpet,
        Self::Pentagon,
        Self::Hexagon,
        Self::Custom,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::SierpinskiTriangle => "Sierpinski triangle",
            Self::SierpinskiCarpet => "Sierpinski carpet",
            Self::Pentagon => "Fractal pentagon",
            Self::Hexagon => "Fractal hexagon",
            Self::Custom => "Custom",
        }
    }

    /// The run settings of this preset.
    pub fn config(self) -> PolygonFractalConfig {
        let (sides, max_depth, scale, algorithm) = match self {
            Self::SierpinskiTriangle => (3, 5, 0.5, PolygonAlgorithm::Sierpinski),
            Self::SierpinskiCarpet => (4, 4, 0.33, PolygonAlgorithm::Carpet),
            Self::Pentagon => (5, 3, 0.38, PolygonAlgorithm::Regular),
            Self::Hexagon => (6, 3, 0.35, PolygonAlgorithm::Regular),
            Self::Custom => (4, 3, 0.5, PolygonAlgorithm::Regular),
        };
        PolygonFractalConfig {
            sides,
            max_depth,
            scale,
            algorithm,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::element_count;

    #[test]
    fn presets_validate() {
        for preset in Preset::ALL {
            assert!(preset.config().validate().is_ok(), "{preset} should be valid");
        }
    }

    #[test]
    fn preset_counts() {
        let expected = [
            (Preset::SierpinskiTriangle, element_count(3, 5)),
            (Preset::SierpinskiCarpet, element_count(8, 4)),
            (Preset::Pentagon, element_count(5, 3)),
            (Preset::Hexagon, element_count(6, 3)),
            (Preset::Custom, element_count(4, 3)),
        ];
        for (preset, count) in expected {
            let elements = preset.config().generate().unwrap();
            assert_eq!(Some(elements.len() as u64), count, "{preset}");
        }
    }

    #[test]
    fn mismatched_algorithm_falls_back_to_regular() {
        let config = PolygonFractalConfig {
            sides: 5,
            max_depth: 2,
            scale: 0.5,
            algorithm: PolygonAlgorithm::Sierpinski,
        };
        assert_eq!(config.resolved_algorithm(), PolygonAlgorithm::Regular);
        assert_eq!(config.generate().unwrap().len(), 31);

        let carpet_on_triangle = PolygonFractalConfig {
            sides: 3,
            algorithm: PolygonAlgorithm::Carpet,
            ..config
        };
        assert_eq!(carpet_on_triangle.resolved_algorithm(), PolygonAlgorithm::Regular);
    }

    #[test]
    fn scale_ignored_outside_regular() {
        let config = PolygonFractalConfig {
            scale: 2.0,
            ..Preset::SierpinskiCarpet.config()
        };
        assert!(config.validate().is_ok());

        let hexagon = PolygonFractalConfig {
            scale: 2.0,
            ..Preset::Hexagon.config()
        };
        assert_eq!(
            hexagon.validate(),
            Err(FractalError::ScaleOutOfRange { scale: 2.0 })
        );
    }

    #[test]
    fn polygon_bounds() {
        let base = Preset::Custom.config();
        assert!(PolygonFractalConfig { max_depth: 0, ..base }.validate().is_err());
        assert!(PolygonFractalConfig { max_depth: 8, ..base }.validate().is_err());
        assert!(PolygonFractalConfig { sides: 2, ..base }.validate().is_err());
        assert_eq!(
            PolygonFractalConfig { sides: 9, ..base }.validate(),
            Err(FractalError::TooManySides { sides: 9, max: 8 })
        );
    }

    #[test]
    fn cube_config() {
        let config = CubeFractalConfig::default();
        assert_eq!(config.generate().unwrap().len(), 585);

        let too_deep = CubeFractalConfig {
            max_depth: 7,
            ..config
        };
        assert_eq!(
            too_deep.generate(),
            Err(FractalError::DepthOutOfRange { depth: 7, min: 0, max: 6 })
        );
    }

    #[test]
    fn cube_geometry_per_element() {
        let config = CubeFractalConfig {
            max_depth: 1,
            ..Default::default()
        };
        let geometry = config.generate_geometry().unwrap();
        assert_eq!(geometry.len(), 9);
        assert!(geometry.iter().all(|e| e.shape().segments.len() == 14));
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in PolygonAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<PolygonAlgorithm>(), Ok(algorithm));
        }
        assert_eq!("Carpet".parse::<PolygonAlgorithm>(), Ok(PolygonAlgorithm::Carpet));
        assert!("koch".parse::<PolygonAlgorithm>().is_err());
    }

    #[test]
    fn generate_matches_direct_generators() {
        let triangle = Preset::SierpinskiTriangle.config();
        assert_eq!(
            triangle.generate(),
            sierpinski(Triangle::base(), 0, triangle.max_depth)
        );

        let carpet_config = Preset::SierpinskiCarpet.config();
        assert_eq!(
            carpet_config.generate(),
            carpet(-4.0, -4.0, 8.0, 0, carpet_config.max_depth)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = Preset::Hexagon.config();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""algorithm":"regular""#), "{json}");
        let back: PolygonFractalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        for algorithm in PolygonAlgorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm.name()));
            assert_eq!(serde_json::from_str::<PolygonAlgorithm>(&json).unwrap(), algorithm);
        }
    }
}
