//! # gpred CLI - Command-Line Gene Finder
//!
//! Predicts protein coding genes on both strands of a bacterial genome and
//! writes two files: a positions table and the gene sequences in FASTA format.
//!
//! ## Usage
//!
//! ```bash
//! # Default thresholds, outputs in the working directory
//! gpred -i genome.fasta
//!
//! # Longer genes only, GFF3 positions file
//! gpred -i genome.fasta -g 300 -f gff -p genes.gff -o genes.fna
//! ```
//!
//! ## Options
//!
//! - `-i, --genome <FILE>`: Input FASTA file (required)
//! - `-g, --min-gene-len <N>`: Minimum gene length (default: 50)
//! - `-s, --max-shine-dalgarno-distance <N>`: Upstream Shine-Dalgarno search distance (default: 16)
//! - `-d, --min-gap <N>`: Minimum gap between genes (default: 40)
//! - `-p, --predicted-positions <FILE>`: Positions file (default: ./predict_genes.csv)
//! - `-o, --predicted-genes <FILE>`: Gene FASTA file (default: ./genes.fna)
//! - `-f, --format <FORMAT>`: Positions file format: csv, gff, sco (default: csv)
//! - `-t, --threads <N>`: Worker threads (default: all cores)
//! - `-q, --quiet`: Only report warnings and errors
//! - `-v, --verbose`: Report per-strand details

use clap::{Arg, ArgAction, Command, value_parser};
use gpred_core::config::{GpredConfig, OutputFormat};
use gpred_core::constants::{
    DEFAULT_MAX_SHINE_DALGARNO_DISTANCE, DEFAULT_MIN_GAP, DEFAULT_MIN_GENE_LENGTH,
};
use gpred_core::output::{write_gene_sequences, write_positions};
use gpred_core::*;
use log::{LevelFilter, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("gpred")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic prokaryotic gene finder")
        .arg(
            Arg::new("genome")
                .short('i')
                .long("genome")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Genome file in FASTA format"),
        )
        .arg(
            Arg::new("min-gene-len")
                .short('g')
                .long("min-gene-len")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value(DEFAULT_MIN_GENE_LENGTH.to_string())
                .help("Minimum gene length in base pairs"),
        )
        .arg(
            Arg::new("max-shine-dalgarno-distance")
                .short('s')
                .long("max-shine-dalgarno-distance")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value(DEFAULT_MAX_SHINE_DALGARNO_DISTANCE.to_string())
                .help("Maximum distance upstream of the start codon searched for a Shine-Dalgarno motif"),
        )
        .arg(
            Arg::new("min-gap")
                .short('d')
                .long("min-gap")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value(DEFAULT_MIN_GAP.to_string())
                .help("Minimum gap between two genes"),
        )
        .arg(
            Arg::new("predicted-positions")
                .short('p')
                .long("predicted-positions")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value("predict_genes.csv")
                .help("Output file for gene positions"),
        )
        .arg(
            Arg::new("predicted-genes")
                .short('o')
                .long("predicted-genes")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value("genes.fna")
                .help("Output file for gene sequences (FASTA)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(["csv", "gff", "sco"])
                .default_value("csv")
                .help("Positions file format: csv, gff, sco"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of worker threads (default: all cores)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Quiet mode"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Verbose mode"),
        )
}

/// Main entry point for the gpred CLI application.
///
/// Parses command-line arguments, analyzes the genome and writes the positions
/// and gene sequence files.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_cli().get_matches();

    let quiet = matches.get_flag("quiet");
    let log_level = if quiet {
        LevelFilter::Warn
    } else if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let format: OutputFormat = matches
        .get_one::<String>("format")
        .ok_or("missing value for --format")?
        .parse()?;

    let threshold = |id: &str| {
        matches
            .get_one::<usize>(id)
            .copied()
            .ok_or_else(|| format!("missing value for --{id}"))
    };
    let config = GpredConfig {
        min_gene_len: threshold("min-gene-len")?,
        max_shine_dalgarno_distance: threshold("max-shine-dalgarno-distance")?,
        min_gap: threshold("min-gap")?,
        output_format: format,
        num_threads: matches.get_one::<usize>("threads").copied(),
    };

    let analyzer = GpredAnalyzer::new(config)?;
    let genome = matches
        .get_one::<PathBuf>("genome")
        .ok_or("missing genome file")?;
    let results = analyzer.analyze_fasta_file(genome)?;

    if let Some(path) = matches.get_one::<PathBuf>("predicted-positions") {
        let mut writer = BufWriter::new(File::create(path)?);
        write_positions(&mut writer, &results, analyzer.config.output_format)?;
        writer.flush()?;
        info!("Gene positions written to {}", path.display());
    }

    if let Some(path) = matches.get_one::<PathBuf>("predicted-genes") {
        let mut writer = BufWriter::new(File::create(path)?);
        write_gene_sequences(&mut writer, &results)?;
        writer.flush()?;
        info!("Gene sequences written to {}", path.display());
    }

    if !quiet {
        eprintln!(
            "Analysis complete! Found {} genes ({} forward, {} reverse).",
            results.genes.len(),
            results.sequence_info.num_forward,
            results.sequence_info.num_reverse
        );
    }

    Ok(())
}
