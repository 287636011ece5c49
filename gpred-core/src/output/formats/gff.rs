use std::io::Write;

use crate::{GpredError, constants::VERSION, results::GpredResults};

/// Write results in GFF3 format
pub fn write_gff_format<W: Write>(
    writer: &mut W,
    results: &GpredResults,
) -> Result<(), GpredError> {
    let info = &results.sequence_info;
    writeln!(writer, "##gff-version 3")?;
    writeln!(writer, "##sequence-region {} 1 {}", info.header, info.length)?;
    match &info.description {
        Some(desc) => writeln!(
            writer,
            "# Sequence Data: seqlen={};seqhdr=\"{} {}\"",
            info.length, info.header, desc
        )?,
        None => writeln!(
            writer,
            "# Sequence Data: seqlen={};seqhdr=\"{}\"",
            info.length, info.header
        )?,
    }
    writeln!(
        writer,
        "# Model Data: version=gpred.v{};gc_cont={:.2}",
        VERSION,
        info.gc_content * 100.0
    )?;

    for (i, gene) in results.genes.iter().enumerate() {
        writeln!(
            writer,
            "{}\tgpred_v{}\tCDS\t{}\t{}\t.\t{}\t0\tID={}_{};length={}",
            info.header,
            VERSION,
            gene.interval.start,
            gene.interval.end,
            gene.strand_symbol(),
            info.header,
            i + 1,
            gene.interval.len()
        )?;
    }
    Ok(())
}
