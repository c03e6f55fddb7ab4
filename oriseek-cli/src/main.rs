//! # Oriseek CLI - Replication Origin Finder
//!
//! A command-line interface for the oriseek origin search.
//!
//! ## Usage
//!
//! ```bash
//! # Default search: 9-mers within 400 bp of the skew minimum
//! oriseek -i genome.fasta
//!
//! # Tab-separated output to a file
//! oriseek -i genome.fasta -f tsv -o candidates.tsv
//!
//! # Shorter motifs in a wider window, keeping the skew profile
//! oriseek -i genome.fasta -k 8 -w 500 --skew skew.tsv
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input FASTA file
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: text, tsv (default: text)
//! - `-k, --kmer-length <K>`: Motif length, 1-14 (default: 9)
//! - `-w, --window <W>`: Window half-width around the skew minimum (default: 400)
//! - `-t, --threads <N>`: Worker threads (default: all cores)
//! - `--workers <N>`: Partitions for the minimum and neighbor searches (default: 8)
//! - `--fanout-depth <D>`: Tree depth down to which tasks are forked (default: 3)
//! - `--skew <FILE>`: Write the prefix skew of every sequence to FILE
//! - `-q, --quiet`: Only log warnings and errors

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use clap::{Arg, ArgAction, Command, value_parser};
use log::info;
use oriseek_core::OriginFinder;
use oriseek_core::config::{OriseekConfig, OutputFormat};
use oriseek_core::constants::{
    DEFAULT_FANOUT_DEPTH, DEFAULT_KMER_LENGTH, DEFAULT_WINDOW_HALF_WIDTH, DEFAULT_WORKER_COUNT,
};
use oriseek_core::output::{write_reports, write_skew};

fn cli() -> Command {
    Command::new("oriseek")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replication origin finder based on GC skew and DnaA box search")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Input FASTA file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text, tsv")
                .default_value("text"),
        )
        .arg(
            Arg::new("kmer-length")
                .short('k')
                .long("kmer-length")
                .value_name("K")
                .help("Motif length (1-14)")
                .value_parser(value_parser!(usize))
                .default_value("9"),
        )
        .arg(
            Arg::new("window")
                .short('w')
                .long("window")
                .value_name("W")
                .help("Window half-width around the skew minimum")
                .value_parser(value_parser!(usize))
                .default_value("400"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("N")
                .help("Worker threads (default: all cores)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("workers")
                .long("workers")
                .value_name("N")
                .help("Partitions for the minimum and neighbor searches")
                .value_parser(value_parser!(usize))
                .default_value("8"),
        )
        .arg(
            Arg::new("fanout-depth")
                .long("fanout-depth")
                .value_name("D")
                .help("Tree depth down to which tasks are forked")
                .value_parser(value_parser!(usize))
                .default_value("3"),
        )
        .arg(
            Arg::new("skew")
                .long("skew")
                .value_name("FILE")
                .help("Write the prefix skew profile to FILE"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only log warnings and errors"),
        )
}

fn main() {
    let matches = cli().get_matches();

    let default_filter = if matches.get_flag("quiet") { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map_or(Ok(OutputFormat::Text), |s| s.parse())?;

    let skew_path = matches.get_one::<String>("skew");
    let config = OriseekConfig {
        fanout_depth: *matches
            .get_one::<usize>("fanout-depth")
            .unwrap_or(&DEFAULT_FANOUT_DEPTH),
        worker_count: *matches
            .get_one::<usize>("workers")
            .unwrap_or(&DEFAULT_WORKER_COUNT),
        window_half_width: *matches
            .get_one::<usize>("window")
            .unwrap_or(&DEFAULT_WINDOW_HALF_WIDTH),
        kmer_length: *matches
            .get_one::<usize>("kmer-length")
            .unwrap_or(&DEFAULT_KMER_LENGTH),
        num_threads: matches.get_one::<usize>("threads").copied(),
        retain_skew: skew_path.is_some(),
        output_format: format,
    };

    let finder = OriginFinder::new(config)?;
    let input = matches
        .get_one::<String>("input")
        .ok_or("an input FASTA file is required")?;
    let reports = finder.analyze_fasta_file(input)?;

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    write_reports(&mut writer, &reports, finder.config().output_format)?;
    writer.flush()?;

    if let Some(skew_file) = skew_path {
        let mut skew_writer = BufWriter::new(File::create(skew_file)?);
        for report in &reports {
            if let Some(skew) = &report.skew {
                writeln!(skew_writer, "# {}", report.sequence_info.header)?;
                write_skew(&mut skew_writer, skew)?;
            }
        }
        skew_writer.flush()?;
    }

    info!(
        "Analysis complete! Found {} candidates in {} sequences.",
        reports.iter().map(|r| r.candidates.len()).sum::<usize>(),
        reports.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = cli().get_matches_from(["oriseek", "-i", "genome.fasta"]);
        assert_eq!(matches.get_one::<usize>("kmer-length"), Some(&9));
        assert_eq!(matches.get_one::<usize>("window"), Some(&400));
        assert_eq!(matches.get_one::<usize>("workers"), Some(&8));
        assert_eq!(matches.get_one::<usize>("fanout-depth"), Some(&3));
        assert_eq!(matches.get_one::<usize>("threads"), None);
        assert!(!matches.get_flag("quiet"));
    }

    #[test]
    fn test_missing_input_rejected() {
        assert!(cli().try_get_matches_from(["oriseek"]).is_err());
    }

    #[test]
    fn test_non_numeric_kmer_length_rejected() {
        assert!(
            cli()
                .try_get_matches_from(["oriseek", "-i", "g.fa", "-k", "nine"])
                .is_err()
        );
    }
}
