//! GC skew over every sequence prefix.
//!
//! The skew of prefix `0..=p` is the number of `G` minus the number of `C`
//! in it. Its minimum marks where the leading strand switches, which is
//! where the replication origin is expected.
//!
//! The computation is a classic two-pass parallel prefix sum over an
//! implicit binary tree:
//!
//! 1. [`TallyTree::from_sequence`] fills one leaf per position
//! 2. [`TallyTree::reduce`] sums subtrees bottom-up
//! 3. [`prefix_skew`] walks the tree top-down, handing each right child the
//!    reduced sum of its left sibling
//! 4. [`locate_minimum`] finds the leftmost minimum of the result
//!
//! Both tree passes fork with `rayon::join` only down to a fixed depth, so
//! the number of live tasks does not grow with the sequence.
//!
//! ```rust
//! use oriseek_core::sequence::NormalizedSequence;
//! use oriseek_core::skew::{locate_minimum, prefix_skew, TallyTree};
//!
//! let normalized = NormalizedSequence::new(b"CCAAATTTGCGGGGG")?;
//! let tree = TallyTree::from_sequence(&normalized)?.reduce(3);
//! let skew = prefix_skew(&tree, 3);
//! let minimum = locate_minimum(&skew, normalized.padding(), 8).unwrap();
//!
//! assert_eq!((minimum.index, minimum.value), (1, -2));
//! # Ok::<(), oriseek_core::types::OriseekError>(())
//! ```

pub mod minimum;
pub mod scan;
pub mod tree;

pub use minimum::{locate_minimum, locate_minimum_sequential};
pub use scan::prefix_skew;
pub use tree::{ReducedTree, TallyTree, UnreducedTree};
