use std::io::Write;

use bio::bio_types::strand::Strand;

use crate::{GpredError, results::GpredResults};

/// Write results in SCO format (simple coordinate output)
pub fn write_sco_format<W: Write>(
    writer: &mut W,
    results: &GpredResults,
) -> Result<(), GpredError> {
    for gene in &results.genes {
        let strand_num = match gene.strand {
            Strand::Forward => 1,
            Strand::Reverse => -1,
            Strand::Unknown => 0,
        };

        writeln!(
            writer,
            "{}\t{}\t{}",
            gene.interval.start, gene.interval.end, strand_num
        )?;
    }
    Ok(())
}
