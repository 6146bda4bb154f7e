//! Axis-aligned cube and the line/face geometry drawn for it.

use nalgebra::{Point3, Vector3};

use crate::error::{Result, check_finite, check_size};

/// Vertex index pairs of the 12 cube edges.
pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Vertex index quads of the 6 cube faces.
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // bottom (z)
    [4, 5, 6, 7], // top (z + s)
    [0, 1, 5, 4], // front (y)
    [2, 3, 7, 6], // back (y + s)
    [1, 2, 6, 5], // right (x + s)
    [0, 3, 7, 4], // left (x)
];

/// A line segment in space.
pub type Segment3 = [Point3<f64>; 2];

/// An axis-aligned cube, defined by its minimum corner and edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube {
    origin: Point3<f64>,
    size: f64,
}

impl Cube {
    /// Creates a new cube from its minimum corner and edge length.
    pub fn new(origin: Point3<f64>, size: f64) -> Self {
        Self { origin, size }
    }

    /// Creates a cube, rejecting non-finite coordinates and non-positive sizes.
    pub fn try_new(origin: Point3<f64>, size: f64) -> Result<Self> {
        check_finite("cube origin", origin.coords.iter())?;
        check_size(size)?;
        Ok(Self::new(origin, size))
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Returns the edge length.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the 8 vertices.
    ///
    /// The bottom square `(z)` comes first, counter-clockwise from the
    /// origin, followed by the top square `(z + s)` in the same order.
    pub fn vertices(&self) -> [Point3<f64>; 8] {
        let s = self.size;
        let o = self.origin;
        [
            o,
            o + Vector3::new(s, 0.0, 0.0),
            o + Vector3::new(s, s, 0.0),
            o + Vector3::new(0.0, s, 0.0),
            o + Vector3::new(0.0, 0.0, s),
            o + Vector3::new(s, 0.0, s),
            o + Vector3::new(s, s, s),
            o + Vector3::new(0.0, s, s),
        ]
    }

    /// Computes the center of the cube.
    pub fn centroid(&self) -> Point3<f64> {
        self.origin + Vector3::repeat(self.size * 0.5)
    }

    /// Computes the volume of the cube.
    pub fn volume(&self) -> f64 {
        self.size.powi(3)
    }

    /// Returns the 12 edges, see [`CUBE_EDGES`].
    pub fn edges(&self) -> [Segment3; 12] {
        let v = self.vertices();
        CUBE_EDGES.map(|[a, b]| [v[a], v[b]])
    }

    /// Returns the two drawn diagonals: `v0 -> v6` and `v1 -> v7`.
    pub fn diagonals(&self) -> [Segment3; 2] {
        let v = self.vertices();
        [[v[0], v[6]], [v[1], v[7]]]
    }

    /// Returns the 6 faces as vertex quads, see [`CUBE_FACES`].
    pub fn faces(&self) -> [[Point3<f64>; 4]; 6] {
        let v = self.vertices();
        CUBE_FACES.map(|quad| quad.map(|i| v[i]))
    }

    /// Splits the cube into its 8 octants.
    ///
    /// Octant `(i, j, k)` sits at `origin + (i, j, k) * size / 2`, ordered
    /// with `i` outermost and `k` innermost.
    pub fn children(&self) -> [Cube; 8] {
        let half = self.size / 2.0;
        std::array::from_fn(|n| {
            let (i, j, k) = ((n >> 2) & 1, (n >> 1) & 1, n & 1);
            let offset = Vector3::new(i as f64, j as f64, k as f64) * half;
            Cube::new(self.origin + offset, half)
        })
    }

    /// Collects the primitives selected by `options`.
    pub fn geometry(&self, options: CubeDrawOptions) -> CubeGeometry {
        let mut segments = Vec::new();
        if options.edges {
            segments.extend(self.edges());
        }
        if options.diagonals {
            segments.extend(self.diagonals());
        }
        let faces = if options.faces {
            self.faces().to_vec()
        } else {
            Vec::new()
        };
        CubeGeometry { segments, faces }
    }
}

/// Which cube primitives a renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeDrawOptions {
    /// The 12 edges.
    pub edges: bool,
    /// The two main diagonals.
    pub diagonals: bool,
    /// The 6 faces.
    pub faces: bool,
}

impl Default for CubeDrawOptions {
    fn default() -> Self {
        Self {
            edges: true,
            diagonals: true,
            faces: false,
        }
    }
}

/// Line segments and faces produced for one cube.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubeGeometry {
    /// Edges first, then diagonals, as enabled.
    pub segments: Vec<Segment3>,
    /// Face quads, empty unless faces are enabled.
    pub faces: Vec<[Point3<f64>; 4]>,
}
