use std::time::Duration;

use crate::types::{Candidate, MinSkew};

/// Origin search results for one sequence.
///
/// # Examples
///
/// ```rust
/// use oriseek_core::{OriginFinder, config::OriseekConfig};
///
/// let finder = OriginFinder::new(OriseekConfig {
///     kmer_length: 3,
///     window_half_width: 10,
///     ..Default::default()
/// })?;
/// let report = finder.analyze_sequence(b"CCAAATTTGCGGGGG", Some("toy".to_string()))?;
///
/// println!("{}: {} bp, {:.2}% GC", report.sequence_info.header,
///          report.sequence_info.length, report.sequence_info.gc_content * 100.0);
/// println!("minimum skew {} at {}", report.min_skew.value, report.min_skew.index);
/// for candidate in &report.candidates {
///     println!("{candidate}");
/// }
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OriginReport {
    pub sequence_info: SequenceInfo,

    /// Leftmost position of the smallest prefix skew.
    pub min_skew: MinSkew,

    /// Part of the sequence searched for motifs.
    pub window: WindowInfo,

    /// Patterns sharing the maximum neighbor-folded count, in counting
    /// order.
    pub candidates: Vec<Candidate>,

    /// Prefix skew of every unpadded position.
    ///
    /// Only filled when [`crate::config::OriseekConfig::retain_skew`] is set.
    pub skew: Option<Vec<i64>>,

    pub timings: PhaseTimings,
}

/// Information about an analyzed sequence.
#[derive(Debug, Clone)]
pub struct SequenceInfo {
    /// Sequence identifier, the first word of the FASTA header
    pub header: String,

    /// Length in base pairs, without padding.
    pub length: usize,

    /// Number of sentinel symbols appended to reach a power of two.
    pub padding: usize,

    pub c_count: u64,
    pub g_count: u64,

    /// GC content as a fraction (0.0 to 1.0).
    pub gc_content: f64,
}

/// Half-open `[start, end)` span of the search window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowInfo {
    pub start: usize,
    pub end: usize,
}

impl WindowInfo {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Wall-clock time spent in each phase of the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub normalize: Duration,
    pub tally: Duration,
    pub reduce: Duration,
    pub scan: Duration,
    pub minimum: Duration,
    pub search: Duration,
}

impl PhaseTimings {
    /// Sum of all phases
    #[must_use]
    pub fn total(&self) -> Duration {
        self.normalize + self.tally + self.reduce + self.scan + self.minimum + self.search
    }
}
