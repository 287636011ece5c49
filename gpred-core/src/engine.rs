use std::path::Path;

use log::{debug, info};

use crate::algorithms::{assemble_predictions, predict_genes, predict_reverse_genes};
use crate::config::GpredConfig;
use crate::motifs::MotifSet;
use crate::results::{GpredResults, SequenceInfo};
use crate::sequence::{GenomeRecord, gc_content, normalize_sequence, read_genome};
use crate::types::{GpredError, PredictedGene};

use bio::bio_types::strand::Strand;

/// High-level gene finding analyzer.
///
/// Validates the configuration and compiles the motif patterns once, then
/// scans both strands of each genome it is given. The forward and reverse scans
/// run side by side on the rayon pool; their results do not depend on it.
///
/// # Examples
///
/// ## Analyze a sequence string
///
/// ```rust
/// use gpred_core::{GpredAnalyzer, config::GpredConfig};
///
/// let config = GpredConfig {
///     min_gene_len: 9,
///     max_shine_dalgarno_distance: 20,
///     min_gap: 3,
///     ..Default::default()
/// };
/// let analyzer = GpredAnalyzer::new(config)?;
///
/// let results = analyzer.analyze_sequence("AAAAAAAGAGGAGGAAAAAAATGAAATAAAAAAAAAAAAAA", None)?;
/// assert_eq!(results.genes.len(), 1);
/// assert_eq!(results.genes[0].interval.start, 21);
/// # Ok::<(), gpred_core::types::GpredError>(())
/// ```
///
/// ## Analyze a FASTA file
///
/// ```rust,no_run
/// use gpred_core::{GpredAnalyzer, config::GpredConfig};
///
/// let analyzer = GpredAnalyzer::new(GpredConfig::default())?;
/// let results = analyzer.analyze_fasta_file("genome.fasta")?;
/// println!("{}: {} genes", results.sequence_info.header, results.genes.len());
/// # Ok::<(), gpred_core::types::GpredError>(())
/// ```
#[derive(Debug)]
pub struct GpredAnalyzer {
    /// Configuration options for gene prediction
    pub config: GpredConfig,
    /// Compiled start, stop and Shine-Dalgarno motifs
    motifs: MotifSet,
    /// Dedicated pool when a thread count was requested
    pool: Option<rayon::ThreadPool>,
}

impl GpredAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidConfig`] if the thresholds are invalid or the
    /// thread pool cannot be built.
    pub fn new(config: GpredConfig) -> Result<Self, GpredError> {
        config.validate()?;

        let pool = match config.num_threads {
            Some(num_threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| {
                        GpredError::InvalidConfig(format!(
                            "Failed to configure thread pool: {e}"
                        ))
                    })?,
            ),
            None => None,
        };

        Ok(Self {
            config,
            motifs: MotifSet::new()?,
            pool,
        })
    }

    /// Analyzes the first record of a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError`] if the file cannot be read, is not valid FASTA or
    /// holds an invalid sequence.
    pub fn analyze_fasta_file<P: AsRef<Path>>(&self, path: P) -> Result<GpredResults, GpredError> {
        let GenomeRecord {
            id,
            description,
            sequence,
        } = read_genome(path)?;
        Ok(self.analyze_normalized(sequence, id, description))
    }

    /// Analyzes a sequence given as a string.
    ///
    /// The header defaults to `gpred_seq_1`.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidSequence`] if the sequence is empty or holds
    /// characters other than nucleotides and whitespace.
    pub fn analyze_sequence(
        &self,
        sequence: &str,
        header: Option<String>,
    ) -> Result<GpredResults, GpredError> {
        let header = header.unwrap_or_else(|| "gpred_seq_1".to_string());
        self.analyze_sequence_bytes(sequence.as_bytes(), header, None)
    }

    /// Analyzes a sequence from raw bytes, normalizing it first.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidSequence`] if normalization fails.
    pub fn analyze_sequence_bytes(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> Result<GpredResults, GpredError> {
        let normalized = normalize_sequence(sequence)?;
        Ok(self.analyze_normalized(normalized, header, description))
    }

    /// Predict genes on both strands of a normalized sequence.
    ///
    /// Returns forward genes and remapped reverse genes merged by start position.
    #[must_use]
    pub fn predict(&self, sequence: &[u8]) -> Vec<PredictedGene> {
        let params = self.config.scan_parameters();
        let scan_both = || {
            rayon::join(
                || predict_genes(sequence, &self.motifs, &params),
                || predict_reverse_genes(sequence, &self.motifs, &params),
            )
        };
        let (forward, reverse) = match &self.pool {
            Some(pool) => pool.install(scan_both),
            None => scan_both(),
        };
        debug!(
            "forward strand: {} gene(s), reverse strand: {} gene(s)",
            forward.len(),
            reverse.len()
        );
        assemble_predictions(&forward, &reverse)
    }

    fn analyze_normalized(
        &self,
        sequence: Vec<u8>,
        header: String,
        description: Option<String>,
    ) -> GpredResults {
        let length = sequence.len();
        let gc = gc_content(&sequence);
        info!(
            "Scanning {} ({} bp, {:.2}% GC) on both strands...",
            header,
            length,
            gc * 100.0
        );

        let genes = self.predict(&sequence);
        let num_forward = genes
            .iter()
            .filter(|gene| gene.strand == Strand::Forward)
            .count();

        info!("{} probable genes found", genes.len());

        GpredResults {
            sequence_info: SequenceInfo {
                length,
                gc_content: gc,
                num_genes: genes.len(),
                num_forward,
                num_reverse: genes.len() - num_forward,
                header,
                description,
            },
            genes,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::reverse_complement;
    use crate::types::GeneInterval;
    use proptest::prelude::*;

    const SINGLE_GENE: &str = "AAAAAAAGAGGAGGAAAAAAATGAAATAAAAAAAAAAAAAA";

    fn small_config() -> GpredConfig {
        GpredConfig {
            min_gene_len: 9,
            max_shine_dalgarno_distance: 20,
            min_gap: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GpredConfig {
            max_shine_dalgarno_distance: 6,
            ..Default::default()
        };
        assert!(matches!(
            GpredAnalyzer::new(config),
            Err(GpredError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_analyze_forward_gene() {
        let analyzer = GpredAnalyzer::new(small_config()).unwrap();
        let results = analyzer.analyze_sequence(SINGLE_GENE, None).unwrap();

        assert_eq!(
            results.genes,
            vec![PredictedGene::forward(GeneInterval::new(21, 29))]
        );
        assert_eq!(results.sequence_info.header, "gpred_seq_1");
        assert_eq!(results.sequence_info.length, 41);
        assert_eq!(results.sequence_info.num_genes, 1);
        assert_eq!(results.sequence_info.num_forward, 1);
        assert_eq!(results.sequence_info.num_reverse, 0);
    }

    #[test]
    fn test_analyze_reverse_gene() {
        let analyzer = GpredAnalyzer::new(small_config()).unwrap();
        let reverse = String::from_utf8(reverse_complement(SINGLE_GENE.as_bytes())).unwrap();
        let results = analyzer
            .analyze_sequence(&reverse, Some("rev".to_string()))
            .unwrap();

        assert_eq!(
            results.genes,
            vec![PredictedGene::reverse(GeneInterval::new(13, 21))]
        );
        assert_eq!(results.sequence_info.num_reverse, 1);
        assert_eq!(results.gene_sequence(&results.genes[0]), b"ATGAAATAA");
    }

    #[test]
    fn test_analyze_both_strands_merged_by_start() {
        let analyzer = GpredAnalyzer::new(small_config()).unwrap();
        let reverse = String::from_utf8(reverse_complement(SINGLE_GENE.as_bytes())).unwrap();
        let genome = format!("{SINGLE_GENE}{reverse}");
        let results = analyzer.analyze_sequence(&genome, None).unwrap();

        assert_eq!(
            results.genes,
            vec![
                PredictedGene::forward(GeneInterval::new(21, 29)),
                PredictedGene::reverse(GeneInterval::new(54, 62)),
            ]
        );
    }

    #[test]
    fn test_analyze_normalizes_input() {
        let analyzer = GpredAnalyzer::new(small_config()).unwrap();
        let wrapped = SINGLE_GENE.to_lowercase().replace("aaaaaa", "aaaaaa\n");
        let results = analyzer.analyze_sequence(&wrapped, None).unwrap();
        assert_eq!(results.sequence, SINGLE_GENE.as_bytes());
        assert_eq!(results.genes.len(), 1);
    }

    #[test]
    fn test_analyze_rejects_invalid_sequence() {
        let analyzer = GpredAnalyzer::new(small_config()).unwrap();
        assert!(analyzer.analyze_sequence("", None).is_err());
        assert!(analyzer.analyze_sequence("ACGTXACGT", None).is_err());
    }

    #[test]
    fn test_thread_count_does_not_change_results() {
        let reverse = String::from_utf8(reverse_complement(SINGLE_GENE.as_bytes())).unwrap();
        let genome = format!("{SINGLE_GENE}{reverse}{SINGLE_GENE}");

        let default = GpredAnalyzer::new(small_config()).unwrap();
        let single = GpredAnalyzer::new(GpredConfig {
            num_threads: Some(1),
            ..small_config()
        })
        .unwrap();

        assert_eq!(
            default.predict(genome.as_bytes()),
            single.predict(genome.as_bytes())
        );
    }

    proptest! {
        #[test]
        fn merged_predictions_hold_invariants(
            sequence in "(AGGAGG|CCTCCT|ATG|CAT|TAA|TTA|[ACGT]){1,200}",
            min_gene_len in 1usize..60,
            max_shine_dalgarno_distance in 7usize..30,
            min_gap in 0usize..20,
        ) {
            let analyzer = GpredAnalyzer::new(GpredConfig {
                min_gene_len,
                max_shine_dalgarno_distance,
                min_gap,
                ..Default::default()
            }).unwrap();
            let results = analyzer.analyze_sequence(&sequence, None).unwrap();
            let length = results.sequence.len();

            for pair in results.genes.windows(2) {
                prop_assert!(pair[0].interval.start <= pair[1].interval.start);
            }
            for gene in &results.genes {
                prop_assert!(gene.interval.start >= 1 && gene.interval.end <= length);
                prop_assert!(gene.interval.is_in_frame());
                prop_assert!(gene.interval.len() >= min_gene_len);

                let coding = results.gene_sequence(gene);
                prop_assert!(matches!(&coding[coding.len() - 3..], b"TAA" | b"TAG" | b"TGA"));
            }
            prop_assert_eq!(
                results.sequence_info.num_forward + results.sequence_info.num_reverse,
                results.genes.len()
            );
        }
    }
}
