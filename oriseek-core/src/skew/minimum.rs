use rayon::prelude::*;

use crate::sequence::strip_padding;
use crate::types::MinSkew;

/// Finds the leftmost position of the smallest skew value in parallel.
///
/// The search is restricted to the unpadded prefix `[0, len - padding)`.
/// That range is cut into `workers` contiguous chunks, chunk `w` covering
/// `[w * len / workers, (w + 1) * len / workers)`. Each chunk keeps its
/// earliest minimum, and the chunk results are merged in chunk order, a
/// later chunk replacing the current best only when strictly smaller. The
/// result is therefore identical to [`locate_minimum_sequential`].
///
/// Returns `None` when the unpadded range is empty.
///
/// # Examples
///
/// ```rust
/// use oriseek_core::skew::locate_minimum;
/// use oriseek_core::types::MinSkew;
///
/// let skew = [0, -1, -3, -2, -3, -3, -9];
/// // the trailing -9 is padding
/// assert_eq!(
///     locate_minimum(&skew, 1, 4),
///     Some(MinSkew { index: 2, value: -3 })
/// );
/// ```
#[must_use]
pub fn locate_minimum(skew: &[i64], padding: usize, workers: usize) -> Option<MinSkew> {
    let searchable = strip_padding(skew, padding);
    let len = searchable.len();
    let workers = workers.max(1);

    let partials: Vec<Option<MinSkew>> = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let start = worker * len / workers;
            let end = ((worker + 1) * len / workers).min(len);
            scan_chunk(searchable, start, end)
        })
        .collect();

    partials
        .into_iter()
        .flatten()
        .fold(None, |best, partial| match best {
            Some(current) if partial.value >= current.value => Some(current),
            _ => Some(partial),
        })
}

/// Single left-to-right scan over the unpadded prefix.
#[must_use]
pub fn locate_minimum_sequential(skew: &[i64], padding: usize) -> Option<MinSkew> {
    let searchable = strip_padding(skew, padding);
    scan_chunk(searchable, 0, searchable.len())
}

fn scan_chunk(skew: &[i64], start: usize, end: usize) -> Option<MinSkew> {
    let mut best: Option<MinSkew> = None;
    for (offset, &value) in skew[start..end].iter().enumerate() {
        match best {
            Some(current) if value >= current.value => {}
            _ => {
                best = Some(MinSkew {
                    index: start + offset,
                    value,
                });
            }
        }
    }
    best
}
