//! Core gene-finding algorithms.
//!
//! ## Modules
//!
//! - [`scanning`]: greedy ORF scan over one strand
//! - [`reconciliation`]: reverse strand scan and coordinate remapping
//! - [`assembly`]: merging both strands into one ordered prediction list
//!
//! ## Algorithm Overview
//!
//! 1. **Forward scan**: walk the genome left to right, pairing each start codon
//!    with its first in-frame stop codon and keeping candidates that are long
//!    enough and carry an upstream Shine-Dalgarno motif
//! 2. **Reverse scan**: run the same scan on the reverse complement and map the
//!    hits back onto forward coordinates
//! 3. **Assembly**: concatenate both lists and sort by start position
//!
//! The scan is a single greedy pass with one cursor:
//!
//! ```text
//! rejected candidate:  cursor = start + 1
//! accepted gene:       cursor = end + min_gap
//! ```

pub mod assembly;
pub mod reconciliation;
pub mod scanning;

pub use assembly::assemble_predictions;
pub use reconciliation::{predict_reverse_genes, remap_to_forward};
pub use scanning::{ScanParameters, predict_genes};
