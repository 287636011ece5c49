use std::io::Write;

use crate::{GpredError, constants::FASTA_LINE_WIDTH, results::GpredResults};

/// Write the nucleotides of every predicted gene in FASTA format.
///
/// Records are named `gene_<n>` in prediction order, starting at 1. Each
/// sequence is read on its coding strand and wrapped at 80 columns.
///
/// # Errors
///
/// Returns [`GpredError::IoError`] if writing fails.
pub fn write_gene_sequences<W: Write>(
    writer: &mut W,
    results: &GpredResults,
) -> Result<(), GpredError> {
    for (i, gene) in results.genes.iter().enumerate() {
        writeln!(writer, ">gene_{}", i + 1)?;
        for line in results.gene_sequence(gene).chunks(FASTA_LINE_WIDTH) {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}
