#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Writes `records` as a FASTA file, one `(id, sequence)` pair per record
pub fn fasta_fixture(records: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for (id, sequence) in records {
        writeln!(file, ">{id}").unwrap();
        for line in sequence.as_bytes().chunks(60) {
            file.write_all(line).unwrap();
            file.write_all(b"\n").unwrap();
        }
    }
    file.flush().unwrap();
    file
}

/// A fresh `oriseek` invocation with logging silenced
pub fn oriseek() -> Command {
    let mut cmd = Command::cargo_bin("oriseek").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

/// Runs the Oriseek CLI on `input` with extra arguments and returns stdout
pub fn run_oriseek(input: &str, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = oriseek().arg("-i").arg(input).args(args).output()?;
    if !output.status.success() {
        return Err(format!(
            "oriseek failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    Ok(String::from_utf8(output.stdout)?)
}

/// Deterministic pseudo-random sequence over `ATGC`
pub fn pseudo_random_sequence(len: usize, seed: u64) -> String {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            char::from(b"ATGC"[(state % 4) as usize])
        })
        .collect()
}
