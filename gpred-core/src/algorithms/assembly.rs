use crate::types::{GeneInterval, PredictedGene};

/// Merge forward and remapped reverse predictions into one list ordered by start.
///
/// Genes on opposite strands may overlap; both are kept. The sort is stable, so
/// on identical coordinates the forward gene comes first.
#[must_use]
pub fn assemble_predictions(
    forward: &[GeneInterval],
    reverse: &[GeneInterval],
) -> Vec<PredictedGene> {
    let mut genes: Vec<PredictedGene> = forward
        .iter()
        .copied()
        .map(PredictedGene::forward)
        .chain(reverse.iter().copied().map(PredictedGene::reverse))
        .collect();
    genes.sort_by_key(|gene| (gene.interval.start, gene.interval.end));
    genes
}
