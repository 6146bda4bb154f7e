//! Fractal generators and the traversal they share.
//!
//! Every generator is a depth-bounded tree walk: emit the current shape,
//! then, unless the terminal depth is reached, walk each child one level
//! deeper. The walk runs on an explicit worklist of `(shape, depth)` pairs
//! rather than the call stack, so depth is bounded only by memory.
//!
//! # Architecture
//!
//! - [`cube`]: octant subdivision of an axis-aligned cube
//! - [`sierpinski`]: corner triangles of a triangle
//! - [`carpet`]: outer cells of a 3x3 grid over a square
//! - [`regular`]: scaled regular polygons toward each vertex
//!
//! With the `parallel` feature each generator also has a `par_*` variant
//! that walks sibling subtrees on the rayon pool and returns the same
//! sequence as its sequential counterpart.

pub mod carpet;
pub mod cube;
pub mod regular;
pub mod sierpinski;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Upper bound on up-front allocation; longer outputs grow as usual.
const MAX_PREALLOCATED: u64 = 1 << 20;

/// Number of elements a full tree with the given branching factor emits for
/// depths `0..=levels`: `(b^(levels + 1) - 1) / (b - 1)`.
///
/// Returns `None` on overflow.
pub fn element_count(branching: u64, levels: u32) -> Option<u64> {
    match branching {
        0 => return Some(1),
        1 => return u64::from(levels).checked_add(1),
        _ => {}
    }
    let mut total: u64 = 0;
    let mut level_size: u64 = 1;
    for level in 0..=levels {
        total = total.checked_add(level_size)?;
        if level < levels {
            level_size = level_size.checked_mul(branching)?;
        }
    }
    Some(total)
}

/// Capacity to reserve for a walk from `depth` down to `max_depth`.
pub(crate) fn capacity_hint(branching: u64, depth: u32, max_depth: u32) -> usize {
    if depth > max_depth {
        return 0;
    }
    element_count(branching, max_depth - depth)
        .map_or(MAX_PREALLOCATED, |n| n.min(MAX_PREALLOCATED)) as usize
}

/// Walks the tree rooted at `root` in pre-order, calling `emit` for every
/// node.
///
/// Nothing is emitted if `depth > max_depth`.
pub(crate) fn traverse<S, I, C, E>(root: S, depth: u32, max_depth: u32, mut children: C, mut emit: E)
where
    C: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    I::IntoIter: DoubleEndedIterator,
    E: FnMut(S, u32),
{
    if depth > max_depth {
        return;
    }

    let mut worklist = vec![(root, depth)];
    while let Some((shape, depth)) = worklist.pop() {
        if depth < max_depth {
            // Reversed so the first child is popped next.
            let next = depth + 1;
            worklist.extend(children(&shape).into_iter().rev().map(|c| (c, next)));
        }
        emit(shape, depth);
    }
}

/// Parallel counterpart of [`traverse`], collecting `emit` results in
/// pre-order.
#[cfg(feature = "parallel")]
pub(crate) fn par_traverse<S, T, C, E>(
    root: S,
    depth: u32,
    max_depth: u32,
    children: &C,
    emit: &E,
) -> Vec<T>
where
    S: Send,
    T: Send,
    C: Fn(&S) -> Vec<S> + Sync,
    E: Fn(S, u32) -> T + Sync,
{
    if depth > max_depth {
        return Vec::new();
    }
    if depth == max_depth {
        return vec![emit(root, depth)];
    }

    let kids = children(&root);
    let subtrees: Vec<Vec<T>> = kids
        .into_par_iter()
        .map(|child| par_traverse(child, depth + 1, max_depth, children, emit))
        .collect();

    let mut out = Vec::with_capacity(1 + subtrees.iter().map(Vec::len).sum::<usize>());
    out.push(emit(root, depth));
    out.extend(subtrees.into_iter().flatten());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Binary tree over integers: node `n` has children `2n + 1` and `2n + 2`.
    fn binary_children(n: &u32) -> [u32; 2] {
        [2 * n + 1, 2 * n + 2]
    }

    fn walk(max_depth: u32) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        traverse(0, 0, max_depth, binary_children, |n, d| out.push((n, d)));
        out
    }

    #[test]
    fn element_count_closed_form() {
        assert_eq!(element_count(8, 0), Some(1));
        assert_eq!(element_count(8, 1), Some(9));
        assert_eq!(element_count(3, 2), Some(13));
        assert_eq!(element_count(1, 4), Some(5));
        assert_eq!(element_count(1, u32::MAX), Some(u64::from(u32::MAX) + 1));
        assert_eq!(element_count(0, u32::MAX), Some(1));
        assert_eq!(element_count(8, 100), None);
    }

    #[test]
    fn capacity_hint_is_capped() {
        assert_eq!(capacity_hint(8, 0, 2), 73);
        assert_eq!(capacity_hint(8, 3, 2), 0);
        assert_eq!(capacity_hint(8, 0, 40), MAX_PREALLOCATED as usize);
    }

    #[test]
    fn traverse_is_pre_order() {
        let visited = walk(2);
        assert_eq!(
            visited,
            vec![(0, 0), (1, 1), (3, 2), (4, 2), (2, 1), (5, 2), (6, 2)]
        );
    }

    #[test]
    fn traverse_terminal_root() {
        assert_eq!(walk(0), vec![(0, 0)]);
    }

    #[test]
    fn traverse_start_past_max_is_empty() {
        let mut count = 0;
        traverse(0_u32, 3, 2, binary_children, |_, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn traverse_handles_deep_chains() {
        // A unary chain far deeper than any call stack would allow.
        let mut last = 0;
        traverse(0_u32, 0, 200_000, |n| [n + 1], |n, _| last = n);
        assert_eq!(last, 200_000);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn par_traverse_matches_sequential() {
        let children = |n: &u32| binary_children(n).to_vec();
        let emit = |n: u32, d: u32| (n, d);
        assert_eq!(par_traverse(0, 0, 5, &children, &emit), walk(5));
    }
}
