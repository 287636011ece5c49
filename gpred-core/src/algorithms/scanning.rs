use log::{debug, trace};

use crate::constants::CODON_LENGTH;
use crate::motifs::MotifSet;
use crate::types::GeneInterval;

/// Thresholds applied to every candidate open reading frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanParameters {
    /// Minimum gene length, stop codon included
    pub min_gene_len: usize,
    /// Furthest upstream distance searched for a Shine-Dalgarno motif
    pub max_shine_dalgarno_distance: usize,
    /// Gap enforced between an accepted gene and the next search
    pub min_gap: usize,
}

/// Greedy left-to-right ORF scan over one strand.
///
/// Starting from position 0, the scan takes the first start codon, pairs it with
/// the first in-frame stop codon and keeps the gene when it is long enough and
/// preceded by a Shine-Dalgarno motif. A rejected candidate moves the cursor one
/// base past its start codon, so an overlapping alternative start is tried next.
/// An accepted gene moves the cursor `min_gap` bases past its stop codon.
///
/// Returned intervals are 1-based, inclusive, and sorted by start.
///
/// # Examples
///
/// ```rust
/// use gpred_core::algorithms::scanning::{predict_genes, ScanParameters};
/// use gpred_core::motifs::MotifSet;
/// use gpred_core::types::GeneInterval;
///
/// let motifs = MotifSet::new()?;
/// let params = ScanParameters {
///     min_gene_len: 9,
///     max_shine_dalgarno_distance: 20,
///     min_gap: 3,
/// };
/// let genes = predict_genes(b"AAAAAAAGAGGAGGAAAAAAATGAAATAAAAAAAAAAAAAA", &motifs, &params);
/// assert_eq!(genes, vec![GeneInterval::new(21, 29)]);
/// # Ok::<(), gpred_core::types::GpredError>(())
/// ```
pub fn predict_genes(
    sequence: &[u8],
    motifs: &MotifSet,
    params: &ScanParameters,
) -> Vec<GeneInterval> {
    let sequence_length = sequence.len();
    let mut genes = Vec::new();
    let mut cursor = 0;

    while sequence_length.saturating_sub(cursor) >= params.min_gap {
        let Some(start) = motifs.find_start(sequence, cursor, sequence_length) else {
            break;
        };

        let Some(stop) = motifs.find_stop(sequence, start) else {
            trace!("start {start}: no in-frame stop codon");
            cursor = start + 1;
            continue;
        };

        // 1-based position of the last stop codon base
        let end = stop + CODON_LENGTH;
        let gene_length = end - start;
        if gene_length < params.min_gene_len {
            trace!("start {start}: {gene_length} bp is below the minimum length");
            cursor = start + 1;
            continue;
        }

        if !motifs.has_shine_dalgarno(sequence, start, params.max_shine_dalgarno_distance) {
            trace!("start {start}: no upstream Shine-Dalgarno motif");
            cursor = start + 1;
            continue;
        }

        let gene = GeneInterval::new(start + 1, end);
        debug!("accepted gene {gene} ({gene_length} bp)");
        genes.push(gene);
        cursor = end + params.min_gap;
    }

    genes
}
