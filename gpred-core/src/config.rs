use crate::{
    algorithms::scanning::ScanParameters,
    constants::{
        DEFAULT_MAX_SHINE_DALGARNO_DISTANCE, DEFAULT_MIN_GAP, DEFAULT_MIN_GENE_LENGTH,
        SHINE_DALGARNO_MIN_SPACER,
    },
    types::GpredError,
};

/// Output format for the gene positions file.
///
/// # Examples
///
/// ```rust
/// use gpred_core::config::{GpredConfig, OutputFormat};
///
/// let config = GpredConfig {
///     output_format: OutputFormat::Gff,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma separated `Start,Stop` table with a header row.
    Csv,

    /// General Feature Format version 3, one CDS line per gene.
    Gff,

    /// Simple coordinate output: start, stop and strand, tab separated.
    Sco,
}

impl std::str::FromStr for OutputFormat {
    type Err = GpredError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "gff" | "gff3" => Ok(Self::Gff),
            "sco" => Ok(Self::Sco),
            other => Err(GpredError::InvalidConfig(format!(
                "unknown output format '{other}' (expected csv, gff or sco)"
            ))),
        }
    }
}

/// Configuration settings for a gpred analysis.
///
/// # Examples
///
/// ```rust
/// use gpred_core::config::GpredConfig;
///
/// let config = GpredConfig {
///     min_gene_len: 300,
///     min_gap: 10,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GpredConfig {
    /// Minimum gene length in base pairs, stop codon included.
    ///
    /// **Default**: 50
    pub min_gene_len: usize,

    /// Furthest upstream distance from the start codon searched for a
    /// Shine-Dalgarno motif. Must exceed 6 for the search window to be non-empty.
    ///
    /// **Default**: 16
    pub max_shine_dalgarno_distance: usize,

    /// Minimum gap between the end of an accepted gene and the next search.
    ///
    /// **Default**: 40
    pub min_gap: usize,

    /// Format of the gene positions file.
    ///
    /// **Default**: [`OutputFormat::Csv`]
    pub output_format: OutputFormat,

    /// Number of threads for the rayon pool running the two strand scans.
    ///
    /// **Default**: `None` (rayon decides)
    pub num_threads: Option<usize>,
}

impl Default for GpredConfig {
    fn default() -> Self {
        Self {
            min_gene_len: DEFAULT_MIN_GENE_LENGTH,
            max_shine_dalgarno_distance: DEFAULT_MAX_SHINE_DALGARNO_DISTANCE,
            min_gap: DEFAULT_MIN_GAP,
            output_format: OutputFormat::Csv,
            num_threads: None,
        }
    }
}

impl GpredConfig {
    /// Check the scan thresholds before any sequence is touched.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidConfig`] if `min_gene_len` is zero or
    /// `max_shine_dalgarno_distance` leaves no room upstream of the spacer.
    pub fn validate(&self) -> Result<(), GpredError> {
        if self.min_gene_len == 0 {
            return Err(GpredError::InvalidConfig(
                "min_gene_len must be a positive integer".to_string(),
            ));
        }
        if self.max_shine_dalgarno_distance <= SHINE_DALGARNO_MIN_SPACER {
            return Err(GpredError::InvalidConfig(format!(
                "max_shine_dalgarno_distance must exceed {SHINE_DALGARNO_MIN_SPACER} (got {})",
                self.max_shine_dalgarno_distance
            )));
        }
        if self.num_threads == Some(0) {
            return Err(GpredError::InvalidConfig(
                "num_threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Thresholds handed to the scanner
    #[must_use]
    pub const fn scan_parameters(&self) -> ScanParameters {
        ScanParameters {
            min_gene_len: self.min_gene_len,
            max_shine_dalgarno_distance: self.max_shine_dalgarno_distance,
            min_gap: self.min_gap,
        }
    }
}
