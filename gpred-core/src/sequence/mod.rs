//! Sequence normalization and strand utilities.
//!
//! Every algorithm in this crate works on a normalized genome: ASCII bytes over
//! `{A, C, G, T}`, uppercase, with no line breaks or other whitespace.
//!
//! ## Modules
//!
//! - [`io`]: FASTA file reading
//!
//! ## Examples
//!
//! ```rust
//! use gpred_core::sequence::{normalize_sequence, reverse_complement};
//!
//! let genome = normalize_sequence(b"atgaaa\ncccuaa\n")?;
//! assert_eq!(genome, b"ATGAAACCCTAA");
//! assert_eq!(reverse_complement(&genome), b"TTAGGGTTTCAT");
//! # Ok::<(), gpred_core::types::GpredError>(())
//! ```

use crate::types::GpredError;

pub mod io;

pub use io::*;

/// Normalize raw nucleotide text into a scan-ready genome.
///
/// Whitespace (including line breaks) is dropped, letters are uppercased and
/// RNA uracil is read as thymine.
///
/// # Errors
///
/// Returns [`GpredError::InvalidSequence`] if the result is empty or holds a
/// character outside `{A, C, G, T}`. The reported position is 0-based in the
/// normalized sequence.
pub fn normalize_sequence(raw: &[u8]) -> Result<Vec<u8>, GpredError> {
    let mut normalized = Vec::with_capacity(raw.len());
    for &byte in raw.iter().filter(|b| !b.is_ascii_whitespace()) {
        let base = match byte.to_ascii_uppercase() {
            b'U' => b'T',
            upper @ (b'A' | b'C' | b'G' | b'T') => upper,
            _ => {
                return Err(GpredError::InvalidSequence(format!(
                    "unexpected character '{}' at position {}",
                    byte.escape_ascii(),
                    normalized.len()
                )));
            }
        };
        normalized.push(base);
    }

    if normalized.is_empty() {
        return Err(GpredError::InvalidSequence("empty sequence".to_string()));
    }
    Ok(normalized)
}

/// Reverse complement of a normalized sequence (A/T and C/G swapped, order reversed).
#[must_use]
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    bio::alphabets::dna::revcomp(sequence)
}

/// Fraction of G and C bases, 0.0 for an empty sequence
#[must_use]
pub fn gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .iter()
        .filter(|&&base| matches!(base, b'G' | b'C'))
        .count();
    gc as f64 / sequence.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_line_breaks_and_uppercases() {
        let normalized = normalize_sequence(b"acgt\nACGT\r\n  ggcc\n").unwrap();
        assert_eq!(normalized, b"ACGTACGTGGCC");
    }

    #[test]
    fn test_normalize_converts_uracil() {
        assert_eq!(normalize_sequence(b"AUGuaa").unwrap(), b"ATGTAA");
    }

    #[test]
    fn test_normalize_rejects_unknown_bases() {
        match normalize_sequence(b"ACG\nTNA") {
            Err(GpredError::InvalidSequence(msg)) => {
                assert!(msg.contains("'N'"), "{msg}");
                assert!(msg.contains("position 4"), "{msg}");
            }
            other => panic!("Expected InvalidSequence, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(normalize_sequence(b"").is_err());
        assert!(normalize_sequence(b"\n\n  \n").is_err());
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ATGC"), b"GCAT");
        assert_eq!(reverse_complement(b"AAACCC"), b"GGGTTT");
        assert_eq!(reverse_complement(b""), b"");
    }

    #[test]
    fn test_gc_content() {
        assert_eq!(gc_content(b""), 0.0);
        assert_eq!(gc_content(b"ATAT"), 0.0);
        assert_eq!(gc_content(b"GCGC"), 1.0);
        assert!((gc_content(b"ATGC") - 0.5).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn reverse_complement_twice_is_identity(sequence in "[ACGT]{0,200}") {
            let bytes = sequence.as_bytes();
            prop_assert_eq!(reverse_complement(&reverse_complement(bytes)), bytes.to_vec());
        }

        #[test]
        fn normalized_sequence_only_holds_nucleotides(sequence in "[ACGTUacgtu\n ]{1,200}") {
            if let Ok(normalized) = normalize_sequence(sequence.as_bytes()) {
                prop_assert!(normalized.iter().all(|b| b"ACGT".contains(b)));
            }
        }
    }
}
