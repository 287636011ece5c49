use bio::bio_types::strand::Strand;

use crate::types::PredictedGene;

/// Gene prediction results from a gpred analysis.
///
/// # Examples
///
/// ```rust,no_run
/// use gpred_core::{GpredAnalyzer, config::GpredConfig};
/// use gpred_core::output::write_positions;
///
/// let analyzer = GpredAnalyzer::new(GpredConfig::default())?;
/// let results = analyzer.analyze_fasta_file("genome.fasta")?;
///
/// println!("Sequence: {}", results.sequence_info.header);
/// println!("Genes: {} (+{} / -{})",
///          results.genes.len(),
///          results.sequence_info.num_forward,
///          results.sequence_info.num_reverse);
///
/// let mut output = std::fs::File::create("predict_genes.csv")?;
/// write_positions(&mut output, &results, analyzer.config.output_format)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GpredResults {
    /// Predicted genes from both strands, sorted by start position.
    pub genes: Vec<PredictedGene>,

    /// Normalized genome the genes were predicted on.
    pub sequence: Vec<u8>,

    /// Information about the analyzed sequence.
    pub sequence_info: SequenceInfo,
}

impl GpredResults {
    /// Nucleotides of a gene read on its coding strand.
    ///
    /// Reverse strand genes are reverse complemented, so every gene starts with
    /// its start codon and ends with its stop codon.
    #[must_use]
    pub fn gene_sequence(&self, gene: &PredictedGene) -> Vec<u8> {
        let slice = &self.sequence[gene.interval.as_range()];
        match gene.strand {
            Strand::Reverse => crate::sequence::reverse_complement(slice),
            Strand::Forward | Strand::Unknown => slice.to_vec(),
        }
    }
}

/// Information about a processed sequence.
#[derive(Debug, Clone)]
pub struct SequenceInfo {
    /// Length of the sequence in base pairs.
    pub length: usize,

    /// GC content as a fraction (0.0 to 1.0).
    pub gc_content: f64,

    /// Number of genes predicted in the sequence.
    pub num_genes: usize,

    /// Genes predicted on the forward strand.
    pub num_forward: usize,

    /// Genes predicted on the reverse strand.
    pub num_reverse: usize,

    /// Sequence identifier from FASTA header.
    pub header: String,

    /// Full sequence description from FASTA header.
    pub description: Option<String>,
}
