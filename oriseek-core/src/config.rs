use crate::constants::{
    DEFAULT_FANOUT_DEPTH, DEFAULT_KMER_LENGTH, DEFAULT_WINDOW_HALF_WIDTH, DEFAULT_WORKER_COUNT,
    MAX_FANOUT_DEPTH, MAX_KMER_LENGTH,
};
use crate::types::OriseekError;

/// Output format options for origin search reports.
///
/// # Formats
///
/// - **Text**: one `Pattern: <kmer> Count: <n>` line per candidate
/// - **Tsv**: tab-separated rows, one per candidate, with a header line
///
/// # Examples
///
/// ```rust
/// use oriseek_core::config::{OutputFormat, OriseekConfig};
///
/// let config = OriseekConfig {
///     output_format: OutputFormat::Tsv,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable candidate listing preceded by a `#` summary line.
    #[default]
    Text,

    /// Tab-separated values, one row per candidate.
    ///
    /// Each row repeats the sequence id and minimum-skew location so that
    /// reports for several sequences can be concatenated and filtered.
    Tsv,
}

impl std::str::FromStr for OutputFormat {
    type Err = OriseekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "txt" => Ok(Self::Text),
            "tsv" => Ok(Self::Tsv),
            _ => Err(OriseekError::InvalidConfig(format!(
                "unknown output format '{s}'; expected 'text' or 'tsv'"
            ))),
        }
    }
}

/// Configuration settings for an origin search.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use oriseek_core::config::OriseekConfig;
///
/// let config = OriseekConfig::default();
/// assert_eq!(config.kmer_length, 9);
/// assert!(config.validate().is_ok());
/// ```
///
/// ## Shorter motifs in a narrower window, on four threads
///
/// ```rust
/// use oriseek_core::config::OriseekConfig;
///
/// let config = OriseekConfig {
///     kmer_length: 6,
///     window_half_width: 250,
///     num_threads: Some(4),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct OriseekConfig {
    /// Depth of the tally tree down to which subtrees are forked as
    /// parallel tasks.
    ///
    /// Subtrees at or below this depth are processed sequentially by the
    /// task that reaches them, so at most `2^fanout_depth` tasks are live
    /// at once. `0` runs the whole reduction and scan in one task.
    ///
    /// **Default**: `3`
    pub fanout_depth: usize,

    /// Number of partitions used by the minimum search and by neighbor
    /// counting.
    ///
    /// **Default**: `8`
    pub worker_count: usize,

    /// Radius of the search window around the minimum-skew position.
    ///
    /// The window spans `[index - w, index + w)`, clipped to the sequence.
    ///
    /// **Default**: `400`
    pub window_half_width: usize,

    /// Length of the motifs searched for in the window.
    ///
    /// **Default**: `9`
    pub kmer_length: usize,

    /// Number of threads in the worker pool.
    ///
    /// When set, the search runs inside a dedicated Rayon pool of this
    /// size. `None` uses the global pool.
    ///
    /// **Default**: `None`
    pub num_threads: Option<usize>,

    /// Keep the full prefix-skew array in the report.
    ///
    /// Costs one `i64` per sequence position.
    ///
    /// **Default**: `false`
    pub retain_skew: bool,

    /// Format used by [`crate::output::write_report`].
    ///
    /// **Default**: [`OutputFormat::Text`]
    pub output_format: OutputFormat,
}

impl Default for OriseekConfig {
    fn default() -> Self {
        Self {
            fanout_depth: DEFAULT_FANOUT_DEPTH,
            worker_count: DEFAULT_WORKER_COUNT,
            window_half_width: DEFAULT_WINDOW_HALF_WIDTH,
            kmer_length: DEFAULT_KMER_LENGTH,
            num_threads: None,
            retain_skew: false,
            output_format: OutputFormat::Text,
        }
    }
}

impl OriseekConfig {
    /// Checks every field against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`OriseekError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), OriseekError> {
        if self.fanout_depth > MAX_FANOUT_DEPTH {
            return Err(OriseekError::InvalidConfig(format!(
                "fanout depth {} exceeds maximum {}",
                self.fanout_depth, MAX_FANOUT_DEPTH
            )));
        }
        if self.worker_count == 0 {
            return Err(OriseekError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.window_half_width == 0 {
            return Err(OriseekError::InvalidConfig(
                "window half-width must be at least 1".to_string(),
            ));
        }
        if !(1..=MAX_KMER_LENGTH).contains(&self.kmer_length) {
            return Err(OriseekError::InvalidConfig(format!(
                "k-mer length {} outside 1..={}",
                self.kmer_length, MAX_KMER_LENGTH
            )));
        }
        if self.num_threads == Some(0) {
            return Err(OriseekError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = OriseekConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fanout_depth, 3);
        assert_eq!(config.worker_count, 8);
        assert_eq!(config.window_half_width, 400);
        assert_eq!(config.kmer_length, 9);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_rejects_zero_workers() {
        let config = OriseekConfig {
            worker_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(OriseekError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_kmer_length_bounds() {
        for kmer_length in [0, MAX_KMER_LENGTH + 1] {
            let config = OriseekConfig {
                kmer_length,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "k = {kmer_length}");
        }
        let config = OriseekConfig {
            kmer_length: MAX_KMER_LENGTH,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_window_and_threads() {
        let config = OriseekConfig {
            window_half_width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = OriseekConfig {
            num_threads: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fanout_depth_zero_is_sequential_and_valid() {
        let config = OriseekConfig {
            fanout_depth: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = OriseekConfig {
            fanout_depth: MAX_FANOUT_DEPTH + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!("gff".parse::<OutputFormat>().is_err());
    }
}
