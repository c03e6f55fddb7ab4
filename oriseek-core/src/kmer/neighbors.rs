use crate::kmer::Kmer;

/// Appends every pattern at Hamming distance exactly 1 from `kmer`.
///
/// Position-major, alternatives in `A, T, G, C` order. Exactly `3 * K`
/// patterns are appended and `kmer` itself is never among them.
pub fn extend_neighbors(kmer: Kmer, out: &mut Vec<Kmer>) {
    out.reserve(3 * kmer.len());
    for position in 0..kmer.len() {
        let current = kmer.digit_at(position);
        for digit in (0..4u8).filter(|&d| d != current) {
            out.push(kmer.with_digit_at(position, digit));
        }
    }
}

/// The Hamming-distance-1 neighbor set of `kmer`.
///
/// ```rust
/// use oriseek_core::kmer::{neighbors, Kmer};
///
/// let kmer: Kmer = "AT".parse()?;
/// let rendered: Vec<String> = neighbors(kmer).iter().map(|k| k.to_string()).collect();
/// assert_eq!(rendered, ["TT", "GT", "CT", "AA", "AG", "AC"]);
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
#[must_use]
pub fn neighbors(kmer: Kmer) -> Vec<Kmer> {
    let mut out = Vec::with_capacity(3 * kmer.len());
    extend_neighbors(kmer, &mut out);
    out
}
