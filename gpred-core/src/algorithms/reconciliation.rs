use log::debug;

use crate::algorithms::scanning::{ScanParameters, predict_genes};
use crate::motifs::MotifSet;
use crate::sequence::reverse_complement;
use crate::types::GeneInterval;

/// Map intervals found on a reverse complement of length `sequence_length`
/// onto forward strand coordinates: `[s, e]` becomes `[L - e + 1, L - s + 1]`.
#[must_use]
pub fn remap_to_forward(genes: &[GeneInterval], sequence_length: usize) -> Vec<GeneInterval> {
    genes
        .iter()
        .map(|gene| gene.to_opposite_strand(sequence_length))
        .collect()
}

/// Predict genes on the reverse strand of `sequence`.
///
/// The reverse complement is scanned with the same motifs and thresholds as the
/// forward strand; the returned intervals are already in forward coordinates,
/// in the order they were found on the reverse complement.
pub fn predict_reverse_genes(
    sequence: &[u8],
    motifs: &MotifSet,
    params: &ScanParameters,
) -> Vec<GeneInterval> {
    let reverse = reverse_complement(sequence);
    predict_reverse_genes_from(&reverse, motifs, params)
}

/// Same as [`predict_reverse_genes`] with a precomputed reverse complement
pub fn predict_reverse_genes_from(
    reverse_complement_sequence: &[u8],
    motifs: &MotifSet,
    params: &ScanParameters,
) -> Vec<GeneInterval> {
    let genes = predict_genes(reverse_complement_sequence, motifs, params);
    debug!("reverse strand scan found {} gene(s)", genes.len());
    remap_to_forward(&genes, reverse_complement_sequence.len())
}
