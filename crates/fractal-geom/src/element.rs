//! Generated elements and the visitors that consume them.
//!
//! Generators hand every element to a [`FractalVisitor`] the moment it is
//! produced, in pre-order. Visitors decouple generation from whatever the
//! caller does with the output (collecting, counting, streaming to a
//! renderer).

use crate::StylePolicy;

/// One visited shape together with its recursion depth and style tag.
///
/// Untagged elements carry `()`; attach a tag with
/// [`FractalElement::styled`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FractalElement<S, T = ()> {
    shape: S,
    depth: u32,
    tag: T,
}

impl<S> FractalElement<S> {
    /// Creates an untagged element.
    pub fn new(shape: S, depth: u32) -> Self {
        Self {
            shape,
            depth,
            tag: (),
        }
    }

    /// Attaches the tag `policy` chooses for this element's depth.
    pub fn styled<P: StylePolicy>(self, policy: &mut P) -> FractalElement<S, P::Tag> {
        let tag = policy.style(self.depth);
        FractalElement {
            shape: self.shape,
            depth: self.depth,
            tag,
        }
    }
}

impl<S, T> FractalElement<S, T> {
    /// Returns the shape.
    #[inline]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Returns the recursion depth (0 for the root).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns the style tag.
    #[inline]
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Splits the element into `(shape, depth, tag)`.
    pub fn into_parts(self) -> (S, u32, T) {
        (self.shape, self.depth, self.tag)
    }

    /// Converts the shape, keeping depth and tag.
    pub fn map_shape<U>(self, f: impl FnOnce(S) -> U) -> FractalElement<U, T> {
        FractalElement {
            shape: f(self.shape),
            depth: self.depth,
            tag: self.tag,
        }
    }
}

/// Attaches style tags to a whole generated sequence.
pub fn style_all<S, P: StylePolicy>(
    elements: Vec<FractalElement<S>>,
    policy: &mut P,
) -> Vec<FractalElement<S, P::Tag>> {
    elements.into_iter().map(|e| e.styled(policy)).collect()
}

/// Visitor for processing elements as a generator produces them.
///
/// Elements arrive in pre-order: a parent always precedes its children.
pub trait FractalVisitor<S> {
    /// Called once per generated element.
    fn visit(&mut self, element: FractalElement<S>);
}

/// A simple visitor that collects all visited elements.
#[derive(Debug)]
pub struct CollectingVisitor<S> {
    collected: Vec<FractalElement<S>>,
}

impl<S> Default for CollectingVisitor<S> {
    fn default() -> Self {
        Self {
            collected: Vec::new(),
        }
    }
}

impl<S> CollectingVisitor<S> {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collecting visitor with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            collected: Vec::with_capacity(capacity),
        }
    }

    /// Returns the collected elements.
    pub fn into_elements(self) -> Vec<FractalElement<S>> {
        self.collected
    }

    /// Returns a reference to the collected elements.
    pub fn elements(&self) -> &[FractalElement<S>] {
        &self.collected
    }
}

impl<S> FractalVisitor<S> for CollectingVisitor<S> {
    fn visit(&mut self, element: FractalElement<S>) {
        self.collected.push(element);
    }
}

/// A visitor that calls a closure for each element.
pub struct FnVisitor<F> {
    func: F,
}

impl<F> FnVisitor<F> {
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<S, F> FractalVisitor<S> for FnVisitor<F>
where
    F: FnMut(FractalElement<S>),
{
    fn visit(&mut self, element: FractalElement<S>) {
        (self.func)(element);
    }
}
