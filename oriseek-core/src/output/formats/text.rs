use std::io::Write;

use crate::{OriseekError, results::OriginReport};

/// Write a report as a `#` summary line followed by one line per candidate
pub fn write_text_format<W: Write>(
    writer: &mut W,
    report: &OriginReport,
) -> Result<(), OriseekError> {
    writeln!(
        writer,
        "# {} length={} min_skew_index={} min_skew={} window={}..{}",
        report.sequence_info.header,
        report.sequence_info.length,
        report.min_skew.index,
        report.min_skew.value,
        report.window.start,
        report.window.end
    )?;
    for candidate in &report.candidates {
        writeln!(writer, "{candidate}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_report;

    #[test]
    fn test_text_layout() {
        let mut buffer = Vec::new();
        write_text_format(&mut buffer, &sample_report()).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "# chr1 length=15 min_skew_index=1 min_skew=-2 window=0..11\n\
             Pattern: AAT Count: 3\n\
             Pattern: ATT Count: 3\n"
        );
    }

    #[test]
    fn test_text_without_candidates() {
        let mut report = sample_report();
        report.candidates.clear();
        let mut buffer = Vec::new();
        write_text_format(&mut buffer, &report).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
