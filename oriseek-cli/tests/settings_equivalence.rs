mod common;

use sha2::{Digest, Sha256};

use crate::common::{fasta_fixture, pseudo_random_sequence, run_oriseek};

fn sha256(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s);
    format!("{:x}", hasher.finalize())
}

fn line_diff(expected: &str, actual: &str) -> String {
    similar::TextDiff::from_lines(expected, actual)
        .unified_diff()
        .header("reference", "variant")
        .to_string()
}

// Thread count, partition count and fork depth must never change the output.
#[test]
fn output_independent_of_parallel_settings() {
    let genomes = [
        ("genome_a".to_string(), pseudo_random_sequence(20_000, 0x5eed)),
        ("genome_b".to_string(), pseudo_random_sequence(4_097, 0xbeef)),
        ("genome_c".to_string(), pseudo_random_sequence(1, 0xcafe)),
    ];
    let records: Vec<(&str, &str)> = genomes
        .iter()
        .map(|(id, seq)| (id.as_str(), seq.as_str()))
        .collect();
    let input = fasta_fixture(&records);
    let input_path = input.path().to_str().unwrap();

    let base = ["-k", "6", "-w", "300", "-f", "tsv"];
    let reference_args: Vec<&str> = base
        .iter()
        .copied()
        .chain(["-t", "1", "--workers", "1", "--fanout-depth", "0"])
        .collect();
    let reference = run_oriseek(input_path, &reference_args).unwrap();
    assert!(reference.lines().count() > 3);
    let reference_hash = sha256(&reference);

    let variants: [&[&str]; 5] = [
        &["-t", "2", "--workers", "2", "--fanout-depth", "1"],
        &["-t", "4", "--workers", "8", "--fanout-depth", "3"],
        &["-t", "3", "--workers", "7", "--fanout-depth", "16"],
        &["--workers", "64", "--fanout-depth", "5"],
        &[],
    ];

    for variant in variants {
        let args: Vec<&str> = base.iter().copied().chain(variant.iter().copied()).collect();
        let output = run_oriseek(input_path, &args).unwrap();
        assert_eq!(
            sha256(&output),
            reference_hash,
            "settings {variant:?} changed the output:\n{}",
            line_diff(&reference, &output)
        );
    }
}

#[test]
fn concatenated_records_match_individual_runs() {
    let first = pseudo_random_sequence(3_000, 11);
    let second = pseudo_random_sequence(5_000, 12);

    let combined = fasta_fixture(&[("first", first.as_str()), ("second", second.as_str())]);
    let combined_out = run_oriseek(combined.path().to_str().unwrap(), &["-k", "5"]).unwrap();

    let mut separate_out = String::new();
    for (id, seq) in [("first", first.as_str()), ("second", second.as_str())] {
        let single = fasta_fixture(&[(id, seq)]);
        separate_out.push_str(&run_oriseek(single.path().to_str().unwrap(), &["-k", "5"]).unwrap());
    }

    let ratio = similar::TextDiff::from_lines(&combined_out, &separate_out).ratio();
    assert!(
        (ratio - 1.0).abs() < f32::EPSILON,
        "outputs differ:\n{}",
        line_diff(&separate_out, &combined_out)
    );
}
