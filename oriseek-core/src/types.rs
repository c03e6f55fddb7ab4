use std::fmt;
use std::ops::{Add, AddAssign};

use thiserror::Error;

/// Running count of cytosine and guanine symbols.
///
/// One tally is stored per tally-tree node; a leaf holds the tally of a
/// single sequence position and an internal node holds the component-wise
/// sum of its two children.
///
/// # Examples
///
/// ```rust
/// use oriseek_core::types::Tally;
///
/// let c = Tally::new(1, 0);
/// let g = Tally::new(0, 1);
/// assert_eq!(c + g, Tally::new(1, 1));
/// assert_eq!((c + g).skew(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tally {
    /// Number of C symbols
    pub c: u64,
    /// Number of G symbols
    pub g: u64,
}

impl Tally {
    /// Tally of a symbol that is neither C nor G
    pub const ZERO: Self = Self { c: 0, g: 0 };

    #[must_use]
    pub const fn new(c: u64, g: u64) -> Self {
        Self { c, g }
    }

    /// G count minus C count.
    #[must_use]
    pub const fn skew(self) -> i64 {
        self.g as i64 - self.c as i64
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            c: self.c + rhs.c,
            g: self.g + rhs.g,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.c += rhs.c;
        self.g += rhs.g;
    }
}

/// Position and value of the smallest prefix skew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinSkew {
    /// Zero-based sequence position
    pub index: usize,
    /// Skew value at `index`
    pub value: i64,
}

/// A motif reaching the maximum neighbor-folded count in the search window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The k-mer, over `{A,T,G,C}`
    pub sequence: String,
    /// Aggregate occurrence count shared with its reverse complement
    pub count: usize,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern: {} Count: {}", self.sequence, self.count)
    }
}

/// Error types for origin search operations
#[derive(Error, Debug)]
pub enum OriseekError {
    /// The input sequence has no symbols
    #[error("Empty input: the sequence has no symbols")]
    EmptyInput,
    /// A symbol outside `{A,T,G,C}` and the padding sentinel
    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidAlphabet { symbol: char, position: usize },
    /// The minimum-skew index does not fall inside the unpadded sequence
    #[error("Window centre {index} out of range (sequence length: {length})")]
    WindowOutOfRange { index: usize, length: usize },
    /// Configuration value outside its accepted range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// String that cannot be parsed as a k-mer
    #[error("Invalid k-mer: {0}")]
    InvalidKmer(String),
    /// Worker pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
}
