//! Output formatting for origin search reports.
//!
//! ## Supported Formats
//!
//! - **Text**: a `#` summary line per sequence, then `Pattern: <kmer> Count: <n>`
//! - **TSV**: `sequence_id`, `pattern`, `count`, `min_skew_index`, `min_skew`
//!
//! Skew profiles are written separately with [`write_skew`].
//!
//! ## Examples
//!
//! ```rust
//! use oriseek_core::{OriginFinder, config::{OriseekConfig, OutputFormat}};
//! use oriseek_core::output::write_report;
//!
//! let finder = OriginFinder::new(OriseekConfig {
//!     kmer_length: 3,
//!     window_half_width: 10,
//!     ..Default::default()
//! })?;
//! let report = finder.analyze_sequence(b"CCAAATTTGCGGGGG", Some("toy".to_string()))?;
//!
//! let mut out = Vec::new();
//! write_report(&mut out, &report, OutputFormat::Text)?;
//! assert!(String::from_utf8_lossy(&out).starts_with("# toy length=15 min_skew_index=1"));
//! # Ok::<(), oriseek_core::types::OriseekError>(())
//! ```

use std::io::Write;

use crate::{OriseekError, config::OutputFormat, results::OriginReport};

mod formats {
    pub mod text;
    pub mod tsv;
}

pub use formats::tsv::TSV_HEADER;
use formats::{
    text::write_text_format,
    tsv::{write_tsv_header, write_tsv_rows},
};

/// Writes one report in the requested format.
///
/// A TSV report starts with its own header line; use [`write_reports`] to
/// put several sequences under one header.
///
/// # Errors
///
/// Returns [`OriseekError::IoError`] if writing fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &OriginReport,
    format: OutputFormat,
) -> Result<(), OriseekError> {
    write_reports(writer, std::slice::from_ref(report), format)
}

/// Writes the reports of several sequences, in order.
///
/// # Errors
///
/// Returns [`OriseekError::IoError`] if writing fails.
pub fn write_reports<W: Write>(
    writer: &mut W,
    reports: &[OriginReport],
    format: OutputFormat,
) -> Result<(), OriseekError> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                write_text_format(writer, report)?;
            }
        }
        OutputFormat::Tsv => {
            write_tsv_header(writer)?;
            for report in reports {
                write_tsv_rows(writer, report)?;
            }
        }
    }
    Ok(())
}

/// Writes a skew profile as `position\tskew` rows, positions zero-based.
///
/// # Errors
///
/// Returns [`OriseekError::IoError`] if writing fails.
pub fn write_skew<W: Write>(writer: &mut W, skew: &[i64]) -> Result<(), OriseekError> {
    writeln!(writer, "position\tskew")?;
    for (position, value) in skew.iter().enumerate() {
        writeln!(writer, "{position}\t{value}")?;
    }
    Ok(())
}
