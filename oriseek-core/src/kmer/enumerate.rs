use std::iter::FusedIterator;

use crate::kmer::Kmer;
use crate::types::OriseekError;

/// Iterates every pattern of one length in counting order.
///
/// Starts at the all-`A` pattern and follows [`Kmer::successor`] until the
/// all-`C` pattern, which is yielded last.
///
/// ```rust
/// use oriseek_core::kmer::KmerEnumerator;
///
/// let patterns: Vec<String> = KmerEnumerator::new(2)?.map(|k| k.to_string()).collect();
/// assert_eq!(patterns.len(), 16);
/// assert_eq!(&patterns[..5], ["AA", "AT", "AG", "AC", "TA"]);
/// assert_eq!(patterns.last().map(String::as_str), Some("CC"));
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KmerEnumerator {
    next: Option<Kmer>,
    remaining: u64,
}

impl KmerEnumerator {
    /// # Errors
    ///
    /// Returns [`OriseekError::InvalidKmer`] for a length the packed
    /// representation cannot hold.
    pub fn new(len: usize) -> Result<Self, OriseekError> {
        let first = Kmer::first(len)?;
        Ok(Self {
            next: Some(first),
            remaining: 1u64 << (2 * len),
        })
    }
}

impl Iterator for KmerEnumerator {
    type Item = Kmer;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.successor();
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KmerEnumerator {}

impl FusedIterator for KmerEnumerator {}
