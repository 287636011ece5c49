use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;
use log::warn;

use crate::sequence::normalize_sequence;
use crate::types::GpredError;

/// The single genome record analyzed by gpred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeRecord {
    /// First word of the FASTA header
    pub id: String,
    /// Remainder of the FASTA header, if any
    pub description: Option<String>,
    /// Normalized nucleotide sequence
    pub sequence: Vec<u8>,
}

/// Read the genome from a FASTA file using rust-bio.
///
/// Only the first record is kept; additional records are reported and ignored.
///
/// # Errors
///
/// Returns [`GpredError::IoError`] if the file cannot be opened,
/// [`GpredError::ParseError`] on malformed FASTA and
/// [`GpredError::InvalidSequence`] if the file holds no record or the sequence
/// fails normalization.
pub fn read_genome<P: AsRef<Path>>(path: P) -> Result<GenomeRecord, GpredError> {
    let file = File::open(path.as_ref())?;
    read_genome_from(file)
}

/// Same as [`read_genome`] for any reader
pub fn read_genome_from<R: Read>(reader: R) -> Result<GenomeRecord, GpredError> {
    let reader = fasta::Reader::new(reader);
    let mut records = reader.records();

    let record = match records.next() {
        Some(result) => result.map_err(|e| GpredError::ParseError(e.to_string()))?,
        None => return Err(GpredError::InvalidSequence("no sequence found".to_string())),
    };

    let extra = records.count();
    if extra > 0 {
        warn!(
            "Input holds {} additional record(s); only '{}' is analyzed",
            extra,
            record.id()
        );
    }

    Ok(GenomeRecord {
        id: record.id().to_string(),
        description: record.desc().map(String::from),
        sequence: normalize_sequence(record.seq())?,
    })
}
