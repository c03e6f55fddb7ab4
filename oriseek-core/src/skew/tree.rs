use std::marker::PhantomData;

use rayon::prelude::*;

use crate::sequence::{NormalizedSequence, tally_symbol};
use crate::types::{OriseekError, Tally};

/// Index of the left child of node `i`
#[inline]
#[must_use]
pub const fn left(i: usize) -> usize {
    i * 2 + 1
}

/// Index of the right child of node `i`
#[inline]
#[must_use]
pub const fn right(i: usize) -> usize {
    left(i) + 1
}

/// Whether node `i` is a leaf of a tree over `leaf_count` positions
#[inline]
#[must_use]
pub const fn is_leaf(i: usize, leaf_count: usize) -> bool {
    right(i) >= leaf_count * 2 - 1
}

/// Marker trait for the reduction state of a [`TallyTree`].
pub trait ReductionState {}

/// Marker type: only the leaves hold meaningful tallies.
#[derive(Debug, Clone)]
pub struct Unreduced;

/// Marker type: every internal node holds the sum of its children.
#[derive(Debug, Clone)]
pub struct Reduced;

impl ReductionState for Unreduced {}
impl ReductionState for Reduced {}

/// Implicit complete binary tree of tallies stored in a flat array.
///
/// For `N` leaves (a power of two) the array has `2N - 1` nodes. Node `i`
/// has children [`left`]`(i)` and [`right`]`(i)`; the last `N` slots,
/// `N - 1 ..= 2N - 2`, are the leaves in sequence order.
///
/// The `S` parameter records whether the bottom-up reduction has run.
/// Only a [`ReducedTree`] is accepted by the prefix scan, so the scan can
/// never observe a partially summed tree.
///
/// # Examples
///
/// ```rust
/// use oriseek_core::sequence::NormalizedSequence;
/// use oriseek_core::skew::TallyTree;
/// use oriseek_core::types::Tally;
///
/// let normalized = NormalizedSequence::new(b"GGCAT")?;
/// let tree = TallyTree::from_sequence(&normalized)?.reduce(2);
///
/// assert_eq!(tree.len(), 15);
/// assert_eq!(tree.root(), Tally::new(1, 2));
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TallyTree<S: ReductionState> {
    nodes: Vec<Tally>,
    leaf_count: usize,
    _state: PhantomData<S>,
}

/// A tree whose leaves are filled but whose internal nodes are still zero.
pub type UnreducedTree = TallyTree<Unreduced>;

/// A tree whose internal nodes hold subtree sums.
pub type ReducedTree = TallyTree<Reduced>;

impl<S: ReductionState> TallyTree<S> {
    /// Number of leaves, `N`
    #[must_use]
    pub const fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Total number of nodes, `2N - 1`
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the first leaf, `N - 1`
    #[must_use]
    pub const fn first_leaf(&self) -> usize {
        self.leaf_count - 1
    }

    #[must_use]
    pub fn node(&self, i: usize) -> Tally {
        self.nodes[i]
    }

    #[must_use]
    pub fn nodes(&self) -> &[Tally] {
        &self.nodes
    }

    #[must_use]
    pub const fn is_leaf(&self, i: usize) -> bool {
        is_leaf(i, self.leaf_count)
    }

    /// Leaf tallies in sequence order
    #[must_use]
    pub fn leaves(&self) -> &[Tally] {
        &self.nodes[self.first_leaf()..]
    }
}

impl UnreducedTree {
    /// Builds the leaves of a tree from a normalized sequence.
    ///
    /// Each symbol is classified with [`tally_symbol`] in parallel; padding
    /// sentinels become zero tallies, so they never perturb any sum.
    ///
    /// # Errors
    ///
    /// Returns [`OriseekError::InvalidAlphabet`] if a symbol cannot be
    /// tallied. With several invalid symbols, which one is reported is
    /// unspecified.
    pub fn from_sequence(sequence: &NormalizedSequence) -> Result<Self, OriseekError> {
        let symbols = sequence.symbols();
        let leaf_count = symbols.len();
        debug_assert!(leaf_count.is_power_of_two());

        let mut nodes = vec![Tally::ZERO; leaf_count * 2 - 1];
        nodes[leaf_count - 1..]
            .par_iter_mut()
            .zip(symbols.par_iter())
            .enumerate()
            .try_for_each(|(position, (leaf, &symbol))| {
                *leaf = tally_symbol(symbol, position)?;
                Ok::<(), OriseekError>(())
            })?;

        Ok(Self {
            nodes,
            leaf_count,
            _state: PhantomData,
        })
    }

    /// Computes every internal node bottom-up and returns the reduced tree.
    ///
    /// Subtrees above `fanout_depth` are reduced as two concurrent tasks
    /// joined before their parent is summed. At `fanout_depth` and below
    /// the calling task finishes the subtree on its own.
    #[must_use]
    pub fn reduce(mut self, fanout_depth: usize) -> ReducedTree {
        let levels = split_levels(&mut self.nodes);
        reduce_subtree(levels, 0, fanout_depth);

        TallyTree {
            nodes: self.nodes,
            leaf_count: self.leaf_count,
            _state: PhantomData,
        }
    }
}

impl ReducedTree {
    /// Tally of the whole sequence
    #[must_use]
    pub fn root(&self) -> Tally {
        self.nodes[0]
    }
}

/// Splits a heap-ordered node array into one mutable slice per tree level.
///
/// Level `d` occupies `[2^d - 1, 2^(d+1) - 1)`.
fn split_levels(nodes: &mut [Tally]) -> Vec<&mut [Tally]> {
    let mut levels = Vec::new();
    let mut rest = nodes;
    let mut width = 1;
    while !rest.is_empty() {
        let take = width.min(rest.len());
        let (level, tail) = std::mem::take(&mut rest).split_at_mut(take);
        levels.push(level);
        rest = tail;
        width *= 2;
    }
    levels
}

/// Splits a subtree's levels below its root into the left and right
/// child subtrees. Each child owns the first or second half of every level.
fn split_children<'a>(levels: Vec<&'a mut [Tally]>) -> (Vec<&'a mut [Tally]>, Vec<&'a mut [Tally]>) {
    levels
        .into_iter()
        .map(|level| {
            let mid = level.len() / 2;
            level.split_at_mut(mid)
        })
        .unzip()
}

/// Reduces the subtree whose levels are given, root first.
fn reduce_subtree(mut levels: Vec<&mut [Tally]>, depth: usize, fanout_depth: usize) -> Tally {
    debug_assert!(levels.iter().enumerate().all(|(d, level)| level.len() == 1 << d));

    if levels.len() == 1 {
        return levels[0][0];
    }
    if depth >= fanout_depth {
        return reduce_sequential(&mut levels, 0, 0);
    }

    let root = levels.remove(0);
    let (left_levels, right_levels) = split_children(levels);
    let (left_sum, right_sum) = rayon::join(
        || reduce_subtree(left_levels, depth + 1, fanout_depth),
        || reduce_subtree(right_levels, depth + 1, fanout_depth),
    );

    root[0] = left_sum + right_sum;
    root[0]
}

/// Post-order reduction addressed by (level, offset) within one subtree.
fn reduce_sequential(levels: &mut [&mut [Tally]], depth: usize, offset: usize) -> Tally {
    if depth + 1 == levels.len() {
        return levels[depth][offset];
    }

    let left_sum = reduce_sequential(levels, depth + 1, offset * 2);
    let right_sum = reduce_sequential(levels, depth + 1, offset * 2 + 1);
    let sum = left_sum + right_sum;
    levels[depth][offset] = sum;
    sum
}
