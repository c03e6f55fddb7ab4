use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;

use crate::types::OriseekError;

/// One FASTA record: identifier, optional description, raw sequence bytes
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Reads every record of a FASTA file using rust-bio.
///
/// Sequence bytes are returned exactly as stored; line breaks are removed
/// by the parser but case is preserved.
///
/// # Errors
///
/// - [`OriseekError::IoError`] if the file cannot be opened
/// - [`OriseekError::ParseError`] if a record is malformed
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, OriseekError> {
    let file = File::open(path)?;
    read_fasta_from(file)
}

/// Reads every FASTA record from any byte source.
///
/// # Errors
///
/// Returns [`OriseekError::ParseError`] if a record is malformed.
pub fn read_fasta_from<R: Read>(source: R) -> Result<Vec<FastaRecord>, OriseekError> {
    let reader = fasta::Reader::new(source);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| OriseekError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    Ok(sequences)
}
