// =============================================================================
// =============================================================================

/// Version string for gpred
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// =============================================================================

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Line width used when writing gene sequences in FASTA format
pub const FASTA_LINE_WIDTH: usize = 80;

// =============================================================================
// Motif patterns
// =============================================================================

/// Start codons: ATG, TTG, CTG, ATT and GTG
pub const START_CODON_PATTERN: &str = "AT[TG]|[ATCG]TG";

/// Stop codons: TAA, TAG and TGA
pub const STOP_CODON_PATTERN: &str = "TA[GA]|TGA";

/// Degenerate AGGAGG ribosome binding motif
pub const SHINE_DALGARNO_PATTERN: &str = "A?G?GAGG|GGAG|GG.GG";

/// Minimum spacing between the end of a Shine-Dalgarno motif and the start codon
pub const SHINE_DALGARNO_MIN_SPACER: usize = 6;

// =============================================================================
// Defaults
// =============================================================================

/// Default minimum gene length in base pairs, stop codon included
pub const DEFAULT_MIN_GENE_LENGTH: usize = 50;

/// Default furthest upstream distance searched for a Shine-Dalgarno motif
pub const DEFAULT_MAX_SHINE_DALGARNO_DISTANCE: usize = 16;

/// Default minimum gap between two genes on the same strand
pub const DEFAULT_MIN_GAP: usize = 40;
