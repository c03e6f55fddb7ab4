//! Sequence classification, padding, and input.
//!
//! ## Overview
//!
//! The skew pipeline only cares about two symbols: every `C` contributes to
//! the cytosine tally and every `G` to the guanine tally. `A`, `T`, and the
//! padding sentinel contribute nothing. Anything else is rejected.
//!
//! ## Modules
//!
//! - [`normalize`]: power-of-two padding with the sentinel symbol
//! - [`io`]: FASTA file reading
//!
//! ## Examples
//!
//! ```rust
//! use oriseek_core::sequence::{count_cg, tally_symbol};
//! use oriseek_core::types::Tally;
//!
//! assert_eq!(tally_symbol(b'C', 0)?, Tally::new(1, 0));
//! assert_eq!(tally_symbol(b'A', 0)?, Tally::ZERO);
//! assert!(tally_symbol(b'N', 0).is_err());
//!
//! assert_eq!(count_cg(b"GGCATC"), Tally::new(2, 2));
//! # Ok::<(), oriseek_core::types::OriseekError>(())
//! ```

use wide::CmpEq;
use wide::u8x32;

use crate::constants::{CHUNK_SIZE, SENTINEL};
use crate::types::{OriseekError, Tally};

pub mod io;
pub mod normalize;

pub use io::*;
pub use normalize::*;

/// Classifies one symbol into its (C, G) tally.
///
/// `C` maps to `(1, 0)`, `G` to `(0, 1)`, and `A`, `T` and the sentinel to
/// `(0, 0)`. Matching is case-sensitive.
///
/// # Errors
///
/// Returns [`OriseekError::InvalidAlphabet`] for any other byte, reporting
/// `position` as the offending index.
#[inline]
pub fn tally_symbol(symbol: u8, position: usize) -> Result<Tally, OriseekError> {
    match symbol {
        b'C' => Ok(Tally::new(1, 0)),
        b'G' => Ok(Tally::new(0, 1)),
        b'A' | b'T' | SENTINEL => Ok(Tally::ZERO),
        other => Err(OriseekError::InvalidAlphabet {
            symbol: char::from(other),
            position,
        }),
    }
}

/// Test if a byte belongs to the nucleotide alphabet `{A,T,G,C}`
#[must_use]
pub const fn is_nucleotide(symbol: u8) -> bool {
    matches!(symbol, b'A' | b'T' | b'G' | b'C')
}

/// Counts C and G symbols directly over raw bytes.
///
/// Processes 32 bytes at a time with `u8x32` comparisons and finishes the
/// remainder with a scalar loop. Other bytes are ignored, so this is only a
/// composition summary, not a validator.
#[must_use]
pub fn count_cg(sequence: &[u8]) -> Tally {
    let c_upper = u8x32::splat(b'C');
    let g_upper = u8x32::splat(b'G');

    let mut c_count = 0u64;
    let mut g_count = 0u64;

    let mut chunks = sequence.chunks_exact(CHUNK_SIZE);
    for chunk in &mut chunks {
        let mut input_array = [0u8; CHUNK_SIZE];
        input_array.copy_from_slice(chunk);
        let input = u8x32::from(input_array);

        c_count += u64::from(input.cmp_eq(c_upper).move_mask().count_ones());
        g_count += u64::from(input.cmp_eq(g_upper).move_mask().count_ones());
    }

    for &symbol in chunks.remainder() {
        match symbol {
            b'C' => c_count += 1,
            b'G' => g_count += 1,
            _ => {}
        }
    }

    Tally::new(c_count, g_count)
}

/// GC fraction of a sequence (0.0 to 1.0).
#[must_use]
pub fn gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let tally = count_cg(sequence);
    (tally.c + tally.g) as f64 / sequence.len() as f64
}
