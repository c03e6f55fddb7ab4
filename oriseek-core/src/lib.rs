//! # Oriseek - Replication Origin Finder
//!
//! Locates the likely origin of replication (OriC) of a bacterial genome
//! and proposes the motifs most likely to be DnaA boxes.
//!
//! ## Overview
//!
//! The leading and lagging strands of a circular chromosome accumulate
//! different amounts of G and C. The cumulative GC skew (G minus C over each
//! prefix) therefore falls until the origin and rises after it. Oriseek
//! computes the skew of every prefix with a parallel tree reduction and
//! scan, takes the leftmost minimum, and searches a window around it for the
//! k-mers that occur most often with up to one mismatch, either strand.
//!
//! ## Features
//!
//! - **Parallel prefix skew**: bounded fork-join over an implicit binary tree
//! - **Deterministic minimum**: leftmost tie-break regardless of partitioning
//! - **Neighbor-folded motif search**: reverse-complement aware counting
//! - **Multiple Output Formats**: plain text and TSV
//! - **Parallel Processing**: Multi-threaded execution using Rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use oriseek_core::{OriginFinder, config::OriseekConfig};
//!
//! let finder = OriginFinder::new(OriseekConfig {
//!     kmer_length: 3,
//!     window_half_width: 10,
//!     ..Default::default()
//! })?;
//! let report = finder.analyze_sequence(b"CCAAATTTGCGGGGG", Some("toy".to_string()))?;
//!
//! assert_eq!(report.min_skew.index, 1);
//! for candidate in &report.candidates {
//!     println!("{candidate}");
//! }
//! # Ok::<(), oriseek_core::types::OriseekError>(())
//! ```
//!
//! ## Architecture
//!
//! The skew tree uses a type-state pattern so the scan can only run on a
//! fully reduced tree:
//!
//! ```rust
//! use oriseek_core::sequence::NormalizedSequence;
//! use oriseek_core::skew::{TallyTree, prefix_skew};
//!
//! let normalized = NormalizedSequence::new(b"GGCAC")?;
//! // UnreducedTree: leaves only
//! let tree = TallyTree::from_sequence(&normalized)?;
//! // ReducedTree: every internal node summed
//! let tree = tree.reduce(3);
//! let skew = prefix_skew(&tree, 3);
//! assert_eq!(&skew[..5], &[1, 2, 1, 1, 0]);
//! # Ok::<(), oriseek_core::types::OriseekError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for analysis
//! - [`engine`]: The end-to-end pipeline
//! - [`types`]: Core data types and the error enum
//! - [`results`]: Per-sequence reports
//! - [`sequence`]: Validation, padding, composition and FASTA input
//! - [`skew`]: Tally tree, prefix scan and minimum search
//! - [`window`]: Window extraction around the skew minimum
//! - [`kmer`]: Pattern encoding, neighbor sets and the motif search
//! - [`output`]: Output formatting
//! - [`bitmap`]: Compact bit set used to track scored patterns
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, OriseekError>`](types::OriseekError),
//! covering:
//!
//! - Empty input and symbols outside the nucleotide alphabet
//! - Invalid configuration or k-mer lengths
//! - I/O and FASTA parse errors

pub mod bitmap;
pub mod config;
pub mod constants;
pub mod engine;
pub mod kmer;
pub mod output;
pub mod results;
pub mod sequence;
pub mod skew;
pub mod types;
pub mod window;

pub use engine::OriginFinder;
pub use types::OriseekError;
