use std::io::Write;

use crate::{OriseekError, results::OriginReport};

pub const TSV_HEADER: &str = "sequence_id\tpattern\tcount\tmin_skew_index\tmin_skew";

pub fn write_tsv_header<W: Write>(writer: &mut W) -> Result<(), OriseekError> {
    writeln!(writer, "{TSV_HEADER}")?;
    Ok(())
}

/// Write one TSV row per candidate, without the header line
pub fn write_tsv_rows<W: Write>(writer: &mut W, report: &OriginReport) -> Result<(), OriseekError> {
    for candidate in &report.candidates {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            report.sequence_info.header,
            candidate.sequence,
            candidate.count,
            report.min_skew.index,
            report.min_skew.value
        )?;
    }
    Ok(())
}
