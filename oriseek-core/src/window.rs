use crate::types::OriseekError;

/// A slice of the sequence around the minimum-skew position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    /// First sequence position in the window (inclusive)
    pub start: usize,
    /// One past the last sequence position (exclusive)
    pub end: usize,
    pub symbols: &'a [u8],
}

impl Window<'_> {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Slices `[index - half_width, index + half_width)` out of `sequence`,
/// clipped to its bounds.
///
/// The sequence is treated as linear; a window near either end is simply
/// shorter.
///
/// # Errors
///
/// Returns [`OriseekError::WindowOutOfRange`] if `index` is not a position
/// of `sequence`.
///
/// # Examples
///
/// ```rust
/// use oriseek_core::window::extract_window;
///
/// let window = extract_window(b"AACCGGTTAACC", 6, 3)?;
/// assert_eq!((window.start, window.end), (3, 9));
/// assert_eq!(window.symbols, b"CGGTTA");
///
/// let clipped = extract_window(b"AACCGGTTAACC", 1, 3)?;
/// assert_eq!((clipped.start, clipped.end), (0, 4));
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
pub fn extract_window(
    sequence: &[u8],
    index: usize,
    half_width: usize,
) -> Result<Window<'_>, OriseekError> {
    if index >= sequence.len() {
        return Err(OriseekError::WindowOutOfRange {
            index,
            length: sequence.len(),
        });
    }

    let start = index.saturating_sub(half_width);
    let end = index.saturating_add(half_width).min(sequence.len());

    Ok(Window {
        start,
        end,
        symbols: &sequence[start..end],
    })
}
