use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::ThreadPool;

use crate::config::OriseekConfig;
use crate::kmer::find_origin_candidates;
use crate::results::{OriginReport, PhaseTimings, SequenceInfo, WindowInfo};
use crate::sequence::{NormalizedSequence, read_fasta_sequences, strip_padding};
use crate::skew::{ReducedTree, TallyTree, locate_minimum, prefix_skew};
use crate::types::OriseekError;
use crate::window::extract_window;

/// Identifier used when a sequence is analyzed without a header
const DEFAULT_HEADER: &str = "Oriseek_Seq_1";

/// High-level origin finder.
///
/// Runs the whole pipeline on a sequence: normalization, tally tree
/// reduction, prefix skew scan, minimum search, window extraction and the
/// neighbor-folded k-mer search.
///
/// When [`OriseekConfig::num_threads`] is set, every analysis runs inside a
/// Rayon pool of that size owned by the finder; otherwise the global pool
/// is used.
///
/// # Examples
///
/// ## Analyze a sequence
///
/// ```rust
/// use oriseek_core::{OriginFinder, config::OriseekConfig};
///
/// let finder = OriginFinder::new(OriseekConfig {
///     kmer_length: 3,
///     window_half_width: 4,
///     ..Default::default()
/// })?;
/// let report = finder.analyze_sequence(b"CCAAATTTGCGGGGG", None)?;
///
/// assert_eq!(report.min_skew.index, 1);
/// assert_eq!(report.min_skew.value, -2);
/// assert_eq!((report.window.start, report.window.end), (0, 5));
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
///
/// ## Analyze a FASTA file
///
/// ```rust,no_run
/// use oriseek_core::{OriginFinder, config::OriseekConfig};
///
/// let finder = OriginFinder::new(OriseekConfig::default())?;
/// for report in finder.analyze_fasta_file("genome.fasta")? {
///     println!("{}: minimum skew at {}", report.sequence_info.header, report.min_skew.index);
///     for candidate in &report.candidates {
///         println!("  {candidate}");
///     }
/// }
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
#[derive(Debug)]
pub struct OriginFinder {
    config: OriseekConfig,
    pool: Option<ThreadPool>,
}

impl OriginFinder {
    /// Creates a finder after validating `config`.
    ///
    /// # Errors
    ///
    /// - [`OriseekError::InvalidConfig`] if a setting is out of range
    /// - [`OriseekError::ThreadPool`] if the dedicated pool cannot be built
    pub fn new(config: OriseekConfig) -> Result<Self, OriseekError> {
        config.validate()?;

        let pool = match config.num_threads {
            Some(num_threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| {
                        OriseekError::ThreadPool(format!("Failed to configure thread pool: {e}"))
                    })?,
            ),
            None => None,
        };

        Ok(Self { config, pool })
    }

    #[must_use]
    pub const fn config(&self) -> &OriseekConfig {
        &self.config
    }

    fn run<T: Send>(&self, task: impl FnOnce() -> T + Send) -> T {
        match &self.pool {
            Some(pool) => pool.install(task),
            None => task(),
        }
    }

    /// Analyzes every record of a FASTA file.
    ///
    /// Records are upper-cased before analysis, so soft-masked input is
    /// accepted. Any other symbol outside `{A,T,G,C}` fails the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`OriseekError`] if the file cannot be read or parsed, or if
    /// any record fails analysis.
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<OriginReport>, OriseekError> {
        let path = path.as_ref();
        let records = read_fasta_sequences(path)?;
        if records.is_empty() {
            warn!("No FASTA records found in {}", path.display());
        }

        let mut reports = Vec::with_capacity(records.len());
        for (header, _description, mut sequence) in records {
            sequence.make_ascii_uppercase();
            reports.push(self.analyze_sequence(&sequence, Some(header))?);
        }
        Ok(reports)
    }

    /// Analyzes one raw sequence over `{A,T,G,C}`.
    ///
    /// # Errors
    ///
    /// - [`OriseekError::EmptyInput`] for an empty sequence
    /// - [`OriseekError::InvalidAlphabet`] for any other symbol, lower-case
    ///   included
    /// - [`OriseekError::WindowOutOfRange`] if the located minimum falls
    ///   outside the sequence
    pub fn analyze_sequence(
        &self,
        sequence: &[u8],
        header: Option<String>,
    ) -> Result<OriginReport, OriseekError> {
        let header = header.unwrap_or_else(|| DEFAULT_HEADER.to_string());
        self.run(|| self.analyze_in_pool(sequence, header))
    }

    /// Prefix skew of every position of `sequence`, padding excluded.
    ///
    /// # Errors
    ///
    /// Same input errors as [`OriginFinder::analyze_sequence`].
    pub fn skew_profile(&self, sequence: &[u8]) -> Result<Vec<i64>, OriseekError> {
        self.run(|| {
            let normalized = NormalizedSequence::new(sequence)?;
            let tree = self.reduced_tree(&normalized)?;
            let skew = prefix_skew(&tree, self.config.fanout_depth);
            Ok(strip_padding(&skew, normalized.padding()).to_vec())
        })
    }

    fn reduced_tree(&self, normalized: &NormalizedSequence) -> Result<ReducedTree, OriseekError> {
        Ok(TallyTree::from_sequence(normalized)?.reduce(self.config.fanout_depth))
    }

    fn analyze_in_pool(&self, sequence: &[u8], header: String) -> Result<OriginReport, OriseekError> {
        let config = &self.config;
        let mut timings = PhaseTimings::default();

        let started = Instant::now();
        let normalized = NormalizedSequence::new(sequence)?;
        timings.normalize = started.elapsed();
        info!(
            "Analyzing {} ({} bp, {} padding)",
            header,
            normalized.raw_len(),
            normalized.padding()
        );

        let started = Instant::now();
        let tree = TallyTree::from_sequence(&normalized)?;
        timings.tally = started.elapsed();

        let started = Instant::now();
        let tree = tree.reduce(config.fanout_depth);
        timings.reduce = started.elapsed();
        let composition = tree.root();

        let started = Instant::now();
        let skew = prefix_skew(&tree, config.fanout_depth);
        timings.scan = started.elapsed();

        let started = Instant::now();
        let min_skew = locate_minimum(&skew, normalized.padding(), config.worker_count)
            .ok_or(OriseekError::EmptyInput)?;
        timings.minimum = started.elapsed();
        debug!(
            "Minimum skew {} at position {}",
            min_skew.value, min_skew.index
        );

        let window = extract_window(normalized.unpadded(), min_skew.index, config.window_half_width)?;

        let started = Instant::now();
        let candidates =
            find_origin_candidates(window.symbols, config.kmer_length, config.worker_count)?;
        timings.search = started.elapsed();

        debug!(
            "Phase timings for {}: normalize {:?}, tally {:?}, reduce {:?}, scan {:?}, minimum {:?}, search {:?}",
            header,
            timings.normalize,
            timings.tally,
            timings.reduce,
            timings.scan,
            timings.minimum,
            timings.search
        );
        info!(
            "{}: {} candidates in window {}..{} (total {:?})",
            header,
            candidates.len(),
            window.start,
            window.end,
            timings.total()
        );

        let length = normalized.raw_len();
        let skew = config
            .retain_skew
            .then(|| strip_padding(&skew, normalized.padding()).to_vec());

        Ok(OriginReport {
            sequence_info: SequenceInfo {
                header,
                length,
                padding: normalized.padding(),
                c_count: composition.c,
                g_count: composition.g,
                gc_content: (composition.c + composition.g) as f64 / length as f64,
            },
            min_skew,
            window: WindowInfo {
                start: window.start,
                end: window.end,
            },
            candidates,
            skew,
            timings,
        })
    }
}
