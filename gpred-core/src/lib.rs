//! # gpred - Heuristic Prokaryotic Gene Finder
//!
//! A small, deterministic gene finder for bacterial genomes. Genes are called
//! on both strands by a greedy scan for open reading frames that carry an
//! upstream Shine-Dalgarno ribosome binding site.
//!
//! ## Overview
//!
//! A candidate gene starts at a start codon (`ATG`, `ATT`, `CTG`, `GTG` or
//! `TTG`) and ends at the first in-frame stop codon (`TAA`, `TAG` or `TGA`).
//! It is kept when it is at least `min_gene_len` bases long and a
//! Shine-Dalgarno motif lies within `max_shine_dalgarno_distance` bases
//! upstream of the start codon.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gpred_core::{GpredAnalyzer, config::GpredConfig};
//!
//! let analyzer = GpredAnalyzer::new(GpredConfig::default())?;
//! let results = analyzer.analyze_fasta_file("genome.fasta")?;
//!
//! for gene in &results.genes {
//!     println!("{}\t{}", gene.interval, gene.strand_symbol());
//! }
//! # Ok::<(), gpred_core::types::GpredError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Thresholds and output options
//! - [`engine`]: [`GpredAnalyzer`], the entry point for whole-genome analysis
//! - [`motifs`]: Compiled start, stop and Shine-Dalgarno patterns
//! - [`algorithms`]: Strand scan, reverse strand reconciliation and assembly
//! - [`sequence`]: FASTA reading and nucleotide helpers
//! - [`results`]: Gene prediction results
//! - [`output`]: Positions table and gene FASTA writers
//! - [`types`]: Core data types and the error type
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, GpredError>`](types::GpredError),
//! covering invalid sequences, invalid configuration, malformed FASTA input and
//! I/O failures.

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod engine;
pub mod motifs;
pub mod output;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::GpredAnalyzer;
pub use types::GpredError;
