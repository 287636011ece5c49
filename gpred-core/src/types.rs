use std::fmt;

use bio::bio_types::strand::Strand;
use serde::Serialize;
use thiserror::Error;

use crate::constants::CODON_LENGTH;

/// A predicted gene interval in 1-based, inclusive genome coordinates.
///
/// `end` is the position of the last nucleotide of the stop codon, so the
/// interval always spans whole codons.
///
/// # Examples
///
/// ```rust
/// use gpred_core::types::GeneInterval;
///
/// let interval = GeneInterval::new(21, 29);
/// assert_eq!(interval.len(), 9);
/// assert!(interval.is_in_frame());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GeneInterval {
    /// First nucleotide of the start codon (1-based)
    #[serde(rename = "Start")]
    pub start: usize,
    /// Last nucleotide of the stop codon (1-based, inclusive)
    #[serde(rename = "Stop")]
    pub end: usize,
}

impl GeneInterval {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of nucleotides covered, stop codon included
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Whether the interval covers a whole number of codons
    #[must_use]
    pub const fn is_in_frame(&self) -> bool {
        self.len() % CODON_LENGTH == 0
    }

    /// Map an interval found on a reverse complement of length `sequence_length`
    /// back onto forward strand coordinates.
    ///
    /// ```rust
    /// use gpred_core::types::GeneInterval;
    ///
    /// let remapped = GeneInterval::new(21, 29).to_opposite_strand(41);
    /// assert_eq!(remapped, GeneInterval::new(13, 21));
    /// ```
    #[must_use]
    pub const fn to_opposite_strand(&self, sequence_length: usize) -> Self {
        Self {
            start: sequence_length - self.end + 1,
            end: sequence_length - self.start + 1,
        }
    }

    /// Zero-based, half-open byte range of this interval
    #[must_use]
    pub const fn as_range(&self) -> std::ops::Range<usize> {
        (self.start - 1)..self.end
    }
}

impl fmt::Display for GeneInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A gene interval tagged with the strand it was predicted on.
///
/// Coordinates are always expressed on the forward strand, whatever the strand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedGene {
    /// Forward strand coordinates
    pub interval: GeneInterval,
    /// Strand carrying the open reading frame
    pub strand: Strand,
}

impl PredictedGene {
    #[must_use]
    pub const fn forward(interval: GeneInterval) -> Self {
        Self {
            interval,
            strand: Strand::Forward,
        }
    }

    #[must_use]
    pub const fn reverse(interval: GeneInterval) -> Self {
        Self {
            interval,
            strand: Strand::Reverse,
        }
    }

    /// Strand as a GFF style character
    #[must_use]
    pub const fn strand_symbol(&self) -> char {
        match self.strand {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::Unknown => '.',
        }
    }
}

/// Error types that can occur during gene prediction
#[derive(Error, Debug)]
pub enum GpredError {
    /// Invalid input sequence format or content
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),
    /// Scan thresholds that cannot produce a meaningful search
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing or serializing tabular data
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<csv::Error> for GpredError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Self::IoError(io_err),
            other => Self::ParseError(format!("{other:?}")),
        }
    }
}
