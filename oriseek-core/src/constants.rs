// =============================================================================
// Alphabet
// =============================================================================

/// Nucleotide alphabet in counting order.
///
/// The k-mer enumerator treats this as the digit order of a mixed-radix
/// counter: `A` is the zero digit and `C` is the carry digit.
pub const ALPHABET: [u8; 4] = [b'A', b'T', b'G', b'C'];

/// Padding symbol appended to reach a power-of-two length.
///
/// Contributes to neither the C nor the G tally and never appears in output.
pub const SENTINEL: u8 = b'X';

// =============================================================================
// Pipeline defaults
// =============================================================================

/// Recursion depth below which tree subtrees are forked as parallel tasks
pub const DEFAULT_FANOUT_DEPTH: usize = 3;

/// Number of partitions for the minimum search and neighbor counting
pub const DEFAULT_WORKER_COUNT: usize = 8;

/// Radius of the search window around the minimum-skew position
pub const DEFAULT_WINDOW_HALF_WIDTH: usize = 400;

/// Motif length searched for in the window
pub const DEFAULT_KMER_LENGTH: usize = 9;

// =============================================================================
// Limits
// =============================================================================

/// Longest supported k-mer.
///
/// Enumeration visits all `4^k` patterns and tracks them in a bitmap of the
/// same size, so this bounds both the runtime and the memory of a search.
pub const MAX_KMER_LENGTH: usize = 14;

/// Deepest supported fan-out; `2^depth` tasks may be live at once
pub const MAX_FANOUT_DEPTH: usize = 16;

/// SIMD lane count used when counting C/G over raw sequence bytes
pub const CHUNK_SIZE: usize = 32;
