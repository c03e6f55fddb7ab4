//! K-mer patterns and the neighbor-folded motif search.
//!
//! ## Encoding
//!
//! A [`Kmer`] packs up to [`MAX_KMER_LENGTH`] symbols two bits apiece,
//! using the digit order of [`ALPHABET`]: `A = 0`, `T = 1`, `G = 2`,
//! `C = 3`. Position 0 is the most significant digit. With this order the
//! complement of a digit is `digit ^ 1`, and the counting-order successor of
//! a pattern is the next integer code.
//!
//! ## Modules
//!
//! - [`enumerate`]: every pattern of a given length in counting order
//! - [`neighbors`]: Hamming-distance-1 neighbor sets
//! - [`search`]: window indexing, parallel counting, candidate selection
//!
//! ## Examples
//!
//! ```rust
//! use oriseek_core::kmer::Kmer;
//!
//! let kmer: Kmer = "ATGATCAAG".parse()?;
//! assert_eq!(kmer.reverse_complement().to_string(), "CTTGATCAT");
//! assert_eq!(kmer.reverse_complement().reverse_complement(), kmer);
//! # Ok::<(), oriseek_core::types::OriseekError>(())
//! ```

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::constants::{ALPHABET, MAX_KMER_LENGTH};
use crate::types::OriseekError;

pub mod enumerate;
pub mod neighbors;
pub mod search;

pub use enumerate::KmerEnumerator;
pub use neighbors::{extend_neighbors, neighbors};
pub use search::{WindowIndex, aggregate_count, find_origin_candidates};

/// Digit of the carry symbol `C`
const TERMINAL_DIGIT: u8 = 3;

/// Maps a nucleotide to its digit in [`ALPHABET`] order
#[inline]
#[must_use]
pub const fn symbol_to_digit(symbol: u8) -> Option<u8> {
    match symbol {
        b'A' => Some(0),
        b'T' => Some(1),
        b'G' => Some(2),
        b'C' => Some(3),
        _ => None,
    }
}

/// Fixed-length nucleotide pattern packed into a `u64`.
///
/// Ordering compares codes, which for equal lengths is the counting order
/// `A < T < G < C` applied left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kmer {
    code: u64,
    len: u8,
}

impl Kmer {
    /// The all-`A` pattern, first in counting order.
    ///
    /// # Errors
    ///
    /// Returns [`OriseekError::InvalidKmer`] if `len` is zero or above
    /// [`MAX_KMER_LENGTH`].
    pub fn first(len: usize) -> Result<Self, OriseekError> {
        check_length(len)?;
        Ok(Self {
            code: 0,
            len: len as u8,
        })
    }

    /// Builds a pattern from its packed code.
    ///
    /// # Errors
    ///
    /// Returns [`OriseekError::InvalidKmer`] for an invalid length or a
    /// code with bits above `2 * len`.
    pub fn from_code(code: u64, len: usize) -> Result<Self, OriseekError> {
        check_length(len)?;
        if code >= 1u64 << (2 * len) {
            return Err(OriseekError::InvalidKmer(format!(
                "code {code} does not fit in {len} symbols"
            )));
        }
        Ok(Self {
            code,
            len: len as u8,
        })
    }

    /// Parses a pattern from bytes over `{A,T,G,C}`.
    ///
    /// # Errors
    ///
    /// Returns [`OriseekError::InvalidKmer`] for an invalid length or any
    /// other byte.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, OriseekError> {
        check_length(bytes.len())?;
        let mut code = 0u64;
        for &symbol in bytes {
            let digit = symbol_to_digit(symbol).ok_or_else(|| {
                OriseekError::InvalidKmer(format!(
                    "{:?} contains {:?}",
                    String::from_utf8_lossy(bytes),
                    char::from(symbol)
                ))
            })?;
            code = (code << 2) | u64::from(digit);
        }
        Ok(Self {
            code,
            len: bytes.len() as u8,
        })
    }

    #[must_use]
    pub const fn code(self) -> u64 {
        self.code
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    #[inline]
    const fn shift(self, position: usize) -> usize {
        2 * (self.len as usize - 1 - position)
    }

    /// Digit at `position`, 0 being the leftmost symbol
    #[inline]
    #[must_use]
    pub const fn digit_at(self, position: usize) -> u8 {
        ((self.code >> self.shift(position)) & 0b11) as u8
    }

    #[inline]
    #[must_use]
    pub const fn symbol_at(self, position: usize) -> u8 {
        ALPHABET[self.digit_at(position) as usize]
    }

    /// Same pattern with the digit at `position` replaced
    #[inline]
    #[must_use]
    pub const fn with_digit_at(self, position: usize, digit: u8) -> Self {
        let shift = self.shift(position);
        let cleared = self.code & !(0b11u64 << shift);
        Self {
            code: cleared | ((digit as u64) << shift),
            len: self.len,
        }
    }

    /// Reverses the pattern and swaps `A`/`T` and `G`/`C`.
    #[must_use]
    pub const fn reverse_complement(self) -> Self {
        let mut code = 0u64;
        let mut remaining = self.code;
        let mut i = 0;
        while i < self.len {
            code = (code << 2) | ((remaining & 0b11) ^ 1);
            remaining >>= 2;
            i += 1;
        }
        Self {
            code,
            len: self.len,
        }
    }

    /// Whether every symbol is the carry symbol `C`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.code == (1u64 << (2 * self.len as u32)) - 1
    }

    /// Next pattern in counting order.
    ///
    /// Advances the rightmost symbol that is not `C` to its successor in
    /// `A, T, G, C` and resets every symbol to its right to `A`. Returns
    /// `None` for the all-`C` pattern.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        let position = (0..self.len()).rev().find(|&p| self.digit_at(p) != TERMINAL_DIGIT)?;

        let mut next = self.with_digit_at(position, self.digit_at(position) + 1);
        for reset in position + 1..self.len() {
            next = next.with_digit_at(reset, 0);
        }
        Some(next)
    }
}

fn check_length(len: usize) -> Result<(), OriseekError> {
    if (1..=MAX_KMER_LENGTH).contains(&len) {
        Ok(())
    } else {
        Err(OriseekError::InvalidKmer(format!(
            "length {len} outside 1..={MAX_KMER_LENGTH}"
        )))
    }
}

impl FromStr for Kmer {
    type Err = OriseekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..self.len() {
            f.write_char(char::from(self.symbol_at(position)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kmer(s: &str) -> Kmer {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        for s in ["A", "C", "ATGC", "CCCCCCCCCCCCCC", "ATGATCAAG"] {
            assert_eq!(kmer(s).to_string(), s);
            assert_eq!(kmer(s).len(), s.len());
        }
    }

    #[test]
    fn test_codes_follow_alphabet_order() {
        assert_eq!(kmer("A").code(), 0);
        assert_eq!(kmer("T").code(), 1);
        assert_eq!(kmer("G").code(), 2);
        assert_eq!(kmer("C").code(), 3);
        assert_eq!(kmer("TA").code(), 4);
        assert_eq!(kmer("AC").code(), 3);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("".parse::<Kmer>().is_err());
        assert!("ATGN".parse::<Kmer>().is_err());
        assert!("atg".parse::<Kmer>().is_err());
        assert!("A".repeat(MAX_KMER_LENGTH + 1).parse::<Kmer>().is_err());
    }

    #[test]
    fn test_from_code_bounds() {
        assert_eq!(Kmer::from_code(63, 3).unwrap(), kmer("CCC"));
        assert!(Kmer::from_code(64, 3).is_err());
        assert!(Kmer::from_code(0, 0).is_err());
    }

    #[test]
    fn test_reverse_complement_known_values() {
        assert_eq!(kmer("ATG").reverse_complement(), kmer("CAT"));
        assert_eq!(kmer("AAAA").reverse_complement(), kmer("TTTT"));
        assert_eq!(kmer("GGGC").reverse_complement(), kmer("GCCC"));
        assert_eq!(kmer("ATGATCAAG").reverse_complement(), kmer("CTTGATCAT"));
        // palindromic
        assert_eq!(kmer("GATC").reverse_complement(), kmer("GATC"));
    }

    #[test]
    fn test_reverse_complement_matches_rust_bio() {
        for code in 0..(1u64 << 12) {
            let pattern = Kmer::from_code(code, 6).unwrap();
            let expected = bio::alphabets::dna::revcomp(pattern.to_string().as_bytes());
            assert_eq!(
                pattern.reverse_complement().to_string().as_bytes(),
                expected.as_slice()
            );
        }
    }

    #[test]
    fn test_reverse_complement_is_involution() {
        for len in 1..=MAX_KMER_LENGTH {
            let mut state = 0x2545_f491_4f6c_dd1du64 ^ len as u64;
            for _ in 0..200 {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let code = state & ((1u64 << (2 * len)) - 1);
                let pattern = Kmer::from_code(code, len).unwrap();
                assert_eq!(pattern.reverse_complement().reverse_complement(), pattern);
            }
        }
    }

    #[test]
    fn test_successor_counting_order() {
        assert_eq!(kmer("AA").successor(), Some(kmer("AT")));
        assert_eq!(kmer("AT").successor(), Some(kmer("AG")));
        assert_eq!(kmer("AG").successor(), Some(kmer("AC")));
        assert_eq!(kmer("AC").successor(), Some(kmer("TA")));
        assert_eq!(kmer("TC").successor(), Some(kmer("GA")));
        assert_eq!(kmer("GCC").successor(), Some(kmer("CAA")));
        assert_eq!(kmer("CC").successor(), None);
    }

    #[test]
    fn test_successor_is_code_increment() {
        let mut pattern = Kmer::first(5).unwrap();
        while let Some(next) = pattern.successor() {
            assert_eq!(next.code(), pattern.code() + 1);
            pattern = next;
        }
        assert!(pattern.is_terminal());
        assert_eq!(pattern.to_string(), "CCCCC");
    }

    #[test]
    fn test_symbol_and_digit_access() {
        let pattern = kmer("GATC");
        assert_eq!(pattern.symbol_at(0), b'G');
        assert_eq!(pattern.symbol_at(3), b'C');
        assert_eq!(pattern.digit_at(1), 0);
        assert_eq!(pattern.with_digit_at(1, 3), kmer("GCTC"));
    }

    #[test]
    fn test_ordering_is_counting_order() {
        let mut patterns = vec![kmer("CA"), kmer("AT"), kmer("TA"), kmer("AA")];
        patterns.sort();
        let rendered: Vec<String> = patterns.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["AA", "AT", "TA", "CA"]);
    }
}
