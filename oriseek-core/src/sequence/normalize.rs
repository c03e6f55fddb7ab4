use crate::constants::SENTINEL;
use crate::sequence::is_nucleotide;
use crate::types::OriseekError;

/// A sequence padded with [`SENTINEL`] to the next power-of-two length.
///
/// The padding is visible to callers on purpose: any position-indexed output
/// computed over [`symbols`](Self::symbols) has `padding()` trailing entries
/// that must be dropped with [`strip_padding`] before use.
///
/// # Examples
///
/// ```rust
/// use oriseek_core::sequence::{strip_padding, NormalizedSequence};
///
/// let normalized = NormalizedSequence::new(b"GATTACA")?;
/// assert_eq!(normalized.symbols(), b"GATTACAX");
/// assert_eq!(normalized.padding(), 1);
///
/// let per_position: Vec<usize> = (0..normalized.padded_len()).collect();
/// assert_eq!(strip_padding(&per_position, normalized.padding()).len(), 7);
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSequence {
    symbols: Vec<u8>,
    raw_len: usize,
}

impl NormalizedSequence {
    /// Validates `raw` and pads it to a power-of-two length.
    ///
    /// # Errors
    ///
    /// - [`OriseekError::EmptyInput`] if `raw` is empty
    /// - [`OriseekError::InvalidAlphabet`] for the first byte outside `{A,T,G,C}`;
    ///   the sentinel itself is rejected here since it may only come from padding
    pub fn new(raw: &[u8]) -> Result<Self, OriseekError> {
        if raw.is_empty() {
            return Err(OriseekError::EmptyInput);
        }
        if let Some(position) = raw.iter().position(|&b| !is_nucleotide(b)) {
            return Err(OriseekError::InvalidAlphabet {
                symbol: char::from(raw[position]),
                position,
            });
        }

        let padded_len = raw.len().next_power_of_two();
        let mut symbols = Vec::with_capacity(padded_len);
        symbols.extend_from_slice(raw);
        symbols.resize(padded_len, SENTINEL);

        Ok(Self {
            symbols,
            raw_len: raw.len(),
        })
    }

    /// All symbols including trailing padding
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// The original symbols without padding
    #[must_use]
    pub fn unpadded(&self) -> &[u8] {
        &self.symbols[..self.raw_len]
    }

    /// Length before padding
    #[must_use]
    pub const fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// Length after padding, always a power of two
    #[must_use]
    pub fn padded_len(&self) -> usize {
        self.symbols.len()
    }

    /// Number of sentinel symbols appended
    #[must_use]
    pub fn padding(&self) -> usize {
        self.symbols.len() - self.raw_len
    }
}

/// Drops the trailing `padding` entries of a position-indexed result.
#[must_use]
pub fn strip_padding<T>(values: &[T], padding: usize) -> &[T] {
    &values[..values.len().saturating_sub(padding)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_next_power_of_two() {
        let normalized = NormalizedSequence::new(b"CCAAATTTGCGGGGG").unwrap();
        assert_eq!(normalized.raw_len(), 15);
        assert_eq!(normalized.padded_len(), 16);
        assert_eq!(normalized.padding(), 1);
        assert_eq!(normalized.symbols()[15], SENTINEL);
        assert_eq!(normalized.unpadded(), b"CCAAATTTGCGGGGG");
    }

    #[test]
    fn test_exact_power_of_two_is_unpadded() {
        let normalized = NormalizedSequence::new(b"ACGTACGT").unwrap();
        assert_eq!(normalized.padded_len(), 8);
        assert_eq!(normalized.padding(), 0);
    }

    #[test]
    fn test_single_symbol() {
        let normalized = NormalizedSequence::new(b"G").unwrap();
        assert_eq!(normalized.padded_len(), 1);
        assert_eq!(normalized.padding(), 0);
    }

    #[test]
    fn test_just_over_power_of_two() {
        let normalized = NormalizedSequence::new(&[b'A'; 17]).unwrap();
        assert_eq!(normalized.padded_len(), 32);
        assert_eq!(normalized.padding(), 15);
        assert!(normalized.symbols()[17..].iter().all(|&b| b == SENTINEL));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            NormalizedSequence::new(b""),
            Err(OriseekError::EmptyInput)
        ));
    }

    #[test]
    fn test_invalid_symbol_reports_position() {
        match NormalizedSequence::new(b"ACGNT") {
            Err(OriseekError::InvalidAlphabet { symbol, position }) => {
                assert_eq!(symbol, 'N');
                assert_eq!(position, 3);
            }
            other => panic!("expected InvalidAlphabet, got {other:?}"),
        }
        assert!(NormalizedSequence::new(b"ACGX").is_err());
        assert!(NormalizedSequence::new(b"acgt").is_err());
    }

    #[test]
    fn test_strip_padding() {
        let values = [1, 2, 3, 4];
        assert_eq!(strip_padding(&values, 0), &[1, 2, 3, 4]);
        assert_eq!(strip_padding(&values, 3), &[1]);
        assert!(strip_padding(&values, 9).is_empty());
    }
}
