use std::io::Write;

use ::csv::WriterBuilder;

use crate::{GpredError, results::GpredResults};

/// Write gene positions as a `Start,Stop` CSV table.
///
/// The header row is written even when no gene was found.
pub fn write_csv_format<W: Write>(
    writer: &mut W,
    results: &GpredResults,
) -> Result<(), GpredError> {
    let mut table = WriterBuilder::new().has_headers(false).from_writer(writer);
    table.write_record(["Start", "Stop"])?;
    for gene in &results.genes {
        table.serialize(gene.interval)?;
    }
    table.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::create_test_results;
    use crate::types::{GeneInterval, PredictedGene};

    #[test]
    fn test_write_csv_format_rows_in_order() {
        let mut buffer = Vec::new();
        write_csv_format(&mut buffer, &create_test_results()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Start,Stop\n3,11\n50,58\n");
    }

    #[test]
    fn test_write_csv_format_no_genes() {
        let mut results = create_test_results();
        results.genes.clear();

        let mut buffer = Vec::new();
        write_csv_format(&mut buffer, &results).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Start,Stop\n");
    }

    #[test]
    fn test_write_csv_format_strand_not_written() {
        let mut results = create_test_results();
        results.genes = vec![PredictedGene::reverse(GeneInterval::new(1200, 2400))];

        let mut buffer = Vec::new();
        write_csv_format(&mut buffer, &results).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Start,Stop\n1200,2400\n");
    }
}
