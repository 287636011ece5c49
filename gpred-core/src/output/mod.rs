//! Output formatting for gene prediction results.
//!
//! Two files come out of a run:
//!
//! - a **positions file** listing every gene, written by [`write_positions`] in
//!   one of the [`OutputFormat`]s (CSV by default, GFF3 or SCO)
//! - a **gene FASTA file** holding the nucleotides of every gene on its coding
//!   strand, written by [`write_gene_sequences`]
//!
//! ## Examples
//!
//! ```rust
//! use gpred_core::{GpredAnalyzer, config::{GpredConfig, OutputFormat}};
//! use gpred_core::output::{write_gene_sequences, write_positions};
//!
//! let analyzer = GpredAnalyzer::new(GpredConfig {
//!     min_gene_len: 9,
//!     max_shine_dalgarno_distance: 20,
//!     min_gap: 3,
//!     ..Default::default()
//! })?;
//! let results = analyzer.analyze_sequence("AAAAAAAGAGGAGGAAAAAAATGAAATAAAAAAAAAAAAAA", None)?;
//!
//! let mut positions = Vec::new();
//! write_positions(&mut positions, &results, OutputFormat::Csv)?;
//! assert_eq!(String::from_utf8(positions).unwrap(), "Start,Stop\n21,29\n");
//!
//! let mut fasta = Vec::new();
//! write_gene_sequences(&mut fasta, &results)?;
//! assert_eq!(String::from_utf8(fasta).unwrap(), ">gene_1\nATGAAATAA\n");
//! # Ok::<(), gpred_core::types::GpredError>(())
//! ```

use std::io::Write;

use crate::{GpredError, config::OutputFormat, results::GpredResults};

mod formats {
    pub mod csv;
    pub mod fasta;
    pub mod gff;
    pub mod sco;
}

pub use formats::fasta::write_gene_sequences;
use formats::{csv::write_csv_format, gff::write_gff_format, sco::write_sco_format};

/// Writes the gene positions in the specified format.
///
/// # Errors
///
/// Returns [`GpredError`] if writing fails.
pub fn write_positions<W: Write>(
    writer: &mut W,
    results: &GpredResults,
    format: OutputFormat,
) -> Result<(), GpredError> {
    match format {
        OutputFormat::Csv => write_csv_format(writer, results),
        OutputFormat::Gff => write_gff_format(writer, results),
        OutputFormat::Sco => write_sco_format(writer, results),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::create_test_results;
    use super::*;

    #[test]
    fn test_write_positions_csv_format() {
        let mut buffer = Vec::new();
        write_positions(&mut buffer, &create_test_results(), OutputFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Start,Stop\n3,11\n50,58\n");
    }

    #[test]
    fn test_write_positions_gff_format() {
        let mut buffer = Vec::new();
        write_positions(&mut buffer, &create_test_results(), OutputFormat::Gff).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("##gff-version 3\n"));
        assert!(output.contains("\tCDS\t3\t11\t.\t+\t0\t"));
        assert!(output.contains("\tCDS\t50\t58\t.\t-\t0\t"));
    }

    #[test]
    fn test_write_positions_sco_format() {
        let mut buffer = Vec::new();
        write_positions(&mut buffer, &create_test_results(), OutputFormat::Sco).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "3\t11\t1\n50\t58\t-1\n");
    }

    #[test]
    fn test_write_positions_empty_genes() {
        let mut results = create_test_results();
        results.genes.clear();

        for format in [OutputFormat::Csv, OutputFormat::Gff, OutputFormat::Sco] {
            let mut buffer = Vec::new();
            let result = write_positions(&mut buffer, &results, format);
            assert!(
                result.is_ok(),
                "Failed to write empty results for format: {:?}",
                format
            );
        }
    }
}
