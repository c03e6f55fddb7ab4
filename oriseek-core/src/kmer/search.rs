use log::debug;
use rayon::prelude::*;

use crate::bitmap::Bitmap;
use crate::kmer::{Kmer, KmerEnumerator, check_length, extend_neighbors, symbol_to_digit};
use crate::types::{Candidate, OriseekError};

/// Every length-`k` substring of a window, as sorted packed codes.
///
/// Counting a pattern is two binary searches, so each neighbor lookup
/// costs `O(log M)` instead of a pass over the window.
#[derive(Debug, Clone)]
pub struct WindowIndex {
    codes: Vec<u64>,
    kmer_length: usize,
}

impl WindowIndex {
    /// Indexes the `window.len() - k + 1` overlapping substrings of `window`.
    ///
    /// A window shorter than `k` yields an empty index.
    ///
    /// # Errors
    ///
    /// Returns [`OriseekError::InvalidKmer`] for an unsupported `k` and
    /// [`OriseekError::InvalidAlphabet`] for a byte outside `{A,T,G,C}`.
    pub fn new(window: &[u8], k: usize) -> Result<Self, OriseekError> {
        check_length(k)?;
        let mask = (1u64 << (2 * k)) - 1;

        let mut codes = Vec::with_capacity((window.len() + 1).saturating_sub(k));
        let mut rolling = 0u64;
        for (position, &symbol) in window.iter().enumerate() {
            let digit = symbol_to_digit(symbol).ok_or(OriseekError::InvalidAlphabet {
                symbol: char::from(symbol),
                position,
            })?;
            rolling = ((rolling << 2) | u64::from(digit)) & mask;
            if position + 1 >= k {
                codes.push(rolling);
            }
        }
        codes.sort_unstable();

        Ok(Self {
            codes,
            kmer_length: k,
        })
    }

    #[must_use]
    pub const fn kmer_length(&self) -> usize {
        self.kmer_length
    }

    /// Number of indexed substrings
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Overlapping exact occurrences of `kmer` in the window
    #[must_use]
    pub fn occurrences(&self, kmer: Kmer) -> usize {
        debug_assert_eq!(kmer.len(), self.kmer_length);
        let code = kmer.code();
        let lower = self.codes.partition_point(|&c| c < code);
        let upper = self.codes.partition_point(|&c| c <= code);
        upper - lower
    }
}

/// Neighbor-folded occurrence count of `kmer`.
///
/// Sums the exact occurrences of every Hamming-distance-1 neighbor of
/// `kmer` and of its reverse complement. A window substring matching
/// neighbors from both sets is counted once per match, and a palindromic
/// pattern therefore counts its neighbor set twice.
///
/// The `6K` neighbors are split into `workers` contiguous slices summed
/// concurrently; the partial sums are added after all of them finish.
#[must_use]
pub fn aggregate_count(kmer: Kmer, index: &WindowIndex, workers: usize) -> usize {
    let mut neighbor_list = Vec::with_capacity(6 * kmer.len());
    extend_neighbors(kmer, &mut neighbor_list);
    extend_neighbors(kmer.reverse_complement(), &mut neighbor_list);

    let total = neighbor_list.len();
    let workers = workers.max(1);

    let partials: Vec<usize> = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let start = worker * total / workers;
            let end = (worker + 1) * total / workers;
            neighbor_list[start..end]
                .iter()
                .map(|&neighbor| index.occurrences(neighbor))
                .sum()
        })
        .collect();

    partials.into_iter().sum()
}

/// Finds the most frequent length-`k` patterns of `window`.
///
/// Every pattern is visited in counting order. A pattern and its reverse
/// complement share one [`aggregate_count`] and are scored together, so
/// the later of the two is skipped. All patterns reaching the maximum count
/// are returned, sorted in counting order; since the maximum starts at
/// zero, a window with no matches at all returns every pattern.
///
/// # Errors
///
/// Returns [`OriseekError::InvalidKmer`] for an unsupported `k` and
/// [`OriseekError::InvalidAlphabet`] if `window` is not over `{A,T,G,C}`.
///
/// # Examples
///
/// ```rust
/// use oriseek_core::kmer::find_origin_candidates;
///
/// let candidates = find_origin_candidates(b"ATGATG", 3, 4)?;
/// let patterns: Vec<&str> = candidates.iter().map(|c| c.sequence.as_str()).collect();
/// assert_eq!(patterns, ["AAT", "ATA", "ATT", "TAT"]);
/// assert!(candidates.iter().all(|c| c.count == 3));
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
pub fn find_origin_candidates(
    window: &[u8],
    k: usize,
    workers: usize,
) -> Result<Vec<Candidate>, OriseekError> {
    let index = WindowIndex::new(window, k)?;
    let enumerator = KmerEnumerator::new(k)?;
    let mut scored = Bitmap::with_len(enumerator.len());

    let mut best = 0usize;
    let mut selected: Vec<Kmer> = Vec::new();
    let mut evaluated = 0usize;

    for pattern in enumerator {
        if scored.test(pattern.code() as usize) {
            continue;
        }
        let complement = pattern.reverse_complement();
        scored.set(pattern.code() as usize);
        scored.set(complement.code() as usize);

        let count = aggregate_count(pattern, &index, workers);
        evaluated += 1;

        if count > best {
            best = count;
            selected.clear();
        }
        if count == best {
            selected.push(pattern);
            if complement != pattern {
                selected.push(complement);
            }
        }
    }

    debug!(
        "Scored {} pattern classes over {} window substrings, max count {}",
        evaluated,
        index.len(),
        best
    );

    selected.sort_unstable();
    Ok(selected
        .into_iter()
        .map(|kmer| Candidate {
            sequence: kmer.to_string(),
            count: best,
        })
        .collect())
}
