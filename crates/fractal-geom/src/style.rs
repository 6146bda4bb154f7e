//! Depth-to-style policies.
//!
//! Geometry carries no color. A renderer picks a [`StylePolicy`] that maps
//! each element's depth to an opaque tag (a color name, an RGB triple, a
//! colormap sample position) and attaches it with
//! [`FractalElement::styled`](crate::FractalElement::styled).

use rand::Rng;

/// Strategy for choosing a style tag from a recursion depth.
pub trait StylePolicy {
    /// The tag attached to each element.
    type Tag;

    /// Returns the tag for an element at `depth`.
    fn style(&mut self, depth: u32) -> Self::Tag;
}

/// Gives every level the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uniform<T>(pub T);

impl<T: Clone> StylePolicy for Uniform<T> {
    type Tag = T;

    fn style(&mut self, _depth: u32) -> T {
        self.0.clone()
    }
}

/// Keeps the base tag for the first levels, then cycles through a palette.
///
/// Depths 0 through 2 use `base`. A deeper element at depth `d` uses
/// `cycle[(d - 1) % cycle.len()]`: each child takes the palette entry picked
/// by its parent's depth. An empty cycle falls back to `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCycle<T> {
    base: T,
    cycle: Vec<T>,
}

impl<T> LevelCycle<T> {
    /// Number of leading levels that keep the base tag.
    pub const BASE_LEVELS: u32 = 3;

    /// Creates a level cycle from a base tag and a palette.
    pub fn new(base: T, cycle: Vec<T>) -> Self {
        Self { base, cycle }
    }
}

impl LevelCycle<&'static str> {
    /// The cube scheme: blue, then red, green and purple by level.
    pub fn cube_levels() -> Self {
        Self::new("blue", vec!["red", "green", "purple"])
    }
}

impl<T: Clone> StylePolicy for LevelCycle<T> {
    type Tag = T;

    fn style(&mut self, depth: u32) -> T {
        if depth < Self::BASE_LEVELS || self.cycle.is_empty() {
            return self.base.clone();
        }
        let parent = (depth - 1) as usize;
        self.cycle[parent % self.cycle.len()].clone()
    }
}

/// Maps depth linearly onto `[0, 1]` for colormap lookup.
///
/// Depth `d` yields `d / max_depth`; with a max depth of 0 every element
/// yields `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthGradient {
    max_depth: u32,
}

impl DepthGradient {
    /// Creates a gradient spanning depths `0..=max_depth`.
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }
}

impl StylePolicy for DepthGradient {
    type Tag = f64;

    fn style(&mut self, depth: u32) -> f64 {
        if self.max_depth == 0 {
            return 0.0;
        }
        (f64::from(depth) / f64::from(self.max_depth)).min(1.0)
    }
}

/// Picks a palette entry uniformly at random for every element.
#[derive(Debug, Clone)]
pub struct RandomChoice<T, R> {
    palette: Vec<T>,
    rng: R,
}

impl<T, R: Rng> RandomChoice<T, R> {
    /// Creates a random policy. Returns `None` if `palette` is empty.
    pub fn new(palette: Vec<T>, rng: R) -> Option<Self> {
        if palette.is_empty() {
            None
        } else {
            Some(Self { palette, rng })
        }
    }
}

impl<R: Rng> RandomChoice<&'static str, R> {
    /// The five-color palette of the cube random scheme.
    pub fn cube_palette(rng: R) -> Self {
        Self {
            palette: vec!["red", "green", "blue", "purple", "orange"],
            rng,
        }
    }
}

impl<T: Clone, R: Rng> StylePolicy for RandomChoice<T, R> {
    type Tag = T;

    fn style(&mut self, _depth: u32) -> T {
        let index = self.rng.random_range(0..self.palette.len());
        self.palette[index].clone()
    }
}

/// A policy backed by a closure.
pub struct FnPolicy<F> {
    func: F,
}

impl<F> FnPolicy<F> {
    /// Creates a new policy from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<T, F> StylePolicy for FnPolicy<F>
where
    F: FnMut(u32) -> T,
{
    type Tag = T;

    fn style(&mut self, depth: u32) -> T {
        (self.func)(depth)
    }
}
