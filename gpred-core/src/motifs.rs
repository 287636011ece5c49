//! Compiled motif patterns and the bounded searches the scanner relies on.
//!
//! The three patterns (start codon, stop codon and Shine-Dalgarno) are compiled
//! once into a [`MotifSet`] and shared read-only by both strand scans.

use std::ops::Range;

use regex::bytes::Regex;

use crate::constants::{
    CODON_LENGTH, SHINE_DALGARNO_MIN_SPACER, SHINE_DALGARNO_PATTERN, START_CODON_PATTERN,
    STOP_CODON_PATTERN,
};
use crate::types::GpredError;

/// A compiled nucleotide motif.
///
/// Holds an unanchored matcher for window searches and an anchored twin used
/// to test a single position.
#[derive(Debug, Clone)]
pub struct MotifPattern {
    search: Regex,
    anchored: Regex,
}

impl MotifPattern {
    /// Compile a motif from a regular expression over `{A, C, G, T}`.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidConfig`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, GpredError> {
        let compile = |expr: &str| {
            Regex::new(expr)
                .map_err(|e| GpredError::InvalidConfig(format!("bad motif '{pattern}': {e}")))
        };
        Ok(Self {
            search: compile(pattern)?,
            anchored: compile(&format!("^(?:{pattern})"))?,
        })
    }

    /// Zero-based `[begin, end)` span of the first match lying fully within
    /// `window`, scanning left to right.
    #[must_use]
    pub fn find_in(&self, sequence: &[u8], window: Range<usize>) -> Option<Range<usize>> {
        let end = window.end.min(sequence.len());
        if window.start >= end {
            return None;
        }
        self.search
            .find_at(&sequence[..end], window.start)
            .map(|m| m.range())
    }

    /// Whether a match begins exactly at `position`
    #[must_use]
    pub fn matches_at(&self, sequence: &[u8], position: usize) -> bool {
        sequence
            .get(position..)
            .is_some_and(|tail| self.anchored.is_match(tail))
    }
}

/// The start, stop and Shine-Dalgarno motifs used by the ORF scanner.
///
/// # Examples
///
/// ```rust
/// use gpred_core::motifs::MotifSet;
///
/// let motifs = MotifSet::new()?;
/// let sequence = b"AAAAAAAGAGGAGGAAAAAAATGAAATAAAAAAAAAAAAAA";
///
/// assert_eq!(motifs.find_start(sequence, 0, sequence.len()), Some(20));
/// assert_eq!(motifs.find_stop(sequence, 20), Some(26));
/// assert!(motifs.has_shine_dalgarno(sequence, 20, 20));
/// # Ok::<(), gpred_core::types::GpredError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MotifSet {
    start_codon: MotifPattern,
    stop_codon: MotifPattern,
    shine_dalgarno: MotifPattern,
}

impl MotifSet {
    /// Compile the built-in motif patterns.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidConfig`] if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, GpredError> {
        Self::with_patterns(
            START_CODON_PATTERN,
            STOP_CODON_PATTERN,
            SHINE_DALGARNO_PATTERN,
        )
    }

    /// Compile a motif set from custom patterns.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidConfig`] if any pattern fails to compile.
    pub fn with_patterns(
        start_codon: &str,
        stop_codon: &str,
        shine_dalgarno: &str,
    ) -> Result<Self, GpredError> {
        Ok(Self {
            start_codon: MotifPattern::new(start_codon)?,
            stop_codon: MotifPattern::new(stop_codon)?,
            shine_dalgarno: MotifPattern::new(shine_dalgarno)?,
        })
    }

    /// Begin index of the first start codon lying fully within `[start, stop)`.
    ///
    /// The search ignores reading frames.
    #[must_use]
    pub fn find_start(&self, sequence: &[u8], start: usize, stop: usize) -> Option<usize> {
        self.start_codon
            .find_in(sequence, start..stop)
            .map(|span| span.start)
    }

    /// Begin index of the first stop codon in the same reading frame as `start`.
    ///
    /// Every in-frame codon up to the end of the sequence is tested; stop
    /// codons in the other two frames are skipped.
    #[must_use]
    pub fn find_stop(&self, sequence: &[u8], start: usize) -> Option<usize> {
        let last_codon = sequence.len().checked_sub(CODON_LENGTH)?;
        (start..=last_codon)
            .step_by(CODON_LENGTH)
            .find(|&position| self.stop_codon.matches_at(sequence, position))
    }

    /// Whether a Shine-Dalgarno motif lies within
    /// `[start - max_shine_dalgarno_distance, start - 6)`.
    ///
    /// The window is clipped at position 0; an empty window yields `false`.
    #[must_use]
    pub fn has_shine_dalgarno(
        &self,
        sequence: &[u8],
        start: usize,
        max_shine_dalgarno_distance: usize,
    ) -> bool {
        let Some(window_end) = start.checked_sub(SHINE_DALGARNO_MIN_SPACER) else {
            return false;
        };
        let window_start = start.saturating_sub(max_shine_dalgarno_distance);
        self.shine_dalgarno
            .find_in(sequence, window_start..window_end)
            .is_some()
    }
}
