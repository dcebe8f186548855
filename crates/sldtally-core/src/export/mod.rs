pub mod xlsx;

use crate::error::SldError;
use crate::model::{BreakerSummary, SUMMARY_COLUMNS};
use std::path::Path;

pub const DEFAULT_SHEET_NAME: &str = "Export";

/// Header row followed by one text row per summary record.
pub fn summary_rows(summary: &BreakerSummary) -> Vec<Vec<String>> {
    let header = SUMMARY_COLUMNS.iter().map(|c| c.to_string()).collect();
    std::iter::once(header)
        .chain(summary.records.iter().map(|r| r.cells().to_vec()))
        .collect()
}

/// Serialize the summary as a single-sheet xlsx workbook.
pub fn xlsx_bytes(summary: &BreakerSummary, sheet_name: &str) -> Result<Vec<u8>, SldError> {
    xlsx::workbook_bytes(sheet_name, &summary_rows(summary))
}

/// Write the summary to `path` as a single-sheet xlsx workbook.
pub fn write_xlsx(summary: &BreakerSummary, path: &Path, sheet_name: &str) -> Result<(), SldError> {
    let bytes = xlsx_bytes(summary, sheet_name)?;
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), rows = summary.records.len(), "wrote workbook");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SummaryRecord;

    #[test]
    fn test_summary_rows_header_first() {
        let summary = BreakerSummary {
            records: vec![SummaryRecord {
                breaker_type: "Air Circuit Breaker".into(),
                rating: "1200A".into(),
                poles: "3P".into(),
                count: 3,
            }],
        };
        let rows = summary_rows(&summary);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["BreakerType", "Current", "Poles", "Count"]);
        assert_eq!(rows[1], vec!["Air Circuit Breaker", "1200A", "3P", "3"]);
    }

    #[test]
    fn test_empty_summary_still_has_header() {
        let rows = summary_rows(&BreakerSummary::default());
        assert_eq!(rows.len(), 1);
    }
}
