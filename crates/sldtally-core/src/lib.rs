pub mod abbreviations;
pub mod aggregate;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod rules;
pub mod trace;

use error::SldError;
use extraction::{Document, PdfExtractor};
use model::{AbbreviationTable, BreakerSummary};
use serde::Serialize;
use trace::RatingTrace;

/// 1-based page holding the single-line diagram.
pub const SLD_PAGE: usize = 3;

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub abbreviations: AbbreviationTable,
    pub trace: Vec<RatingTrace>,
    pub summary: BreakerSummary,
}

/// Main API entry point: build the breaker inventory of a PDF drawing.
pub fn summarize_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<PipelineOutput, SldError> {
    let document = Document::extract(pdf_bytes, extractor)?;
    summarize_document(&document)
}

/// Run the pipeline over already extracted pages.
///
/// The legend is collected from every page; breakers come from `SLD_PAGE`
/// only. A document shorter than that yields an empty inventory.
pub fn summarize_document(document: &Document) -> Result<PipelineOutput, SldError> {
    let abbreviations = abbreviations::load_abbreviations(document);

    let raw_sld = document.page_text(SLD_PAGE).unwrap_or_default();
    if raw_sld.is_empty() {
        tracing::warn!(
            page = SLD_PAGE,
            pages = document.page_count(),
            "single-line diagram page is missing or empty"
        );
    }

    let normalized = parsing::normalize_sld_text(raw_sld);
    let extraction = parsing::extract_breakers_traced(&normalized);
    let summary = aggregate::summarize(&extraction.instances, &abbreviations)?;

    tracing::debug!(
        abbreviations = abbreviations.len(),
        breakers = extraction.instances.len(),
        groups = summary.records.len(),
        "pipeline complete"
    );

    Ok(PipelineOutput {
        abbreviations,
        trace: extraction.trace,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use extraction::PageContent;

    #[test]
    fn test_short_document_yields_empty_summary() {
        let doc = Document::new(vec![PageContent::new(1, "Abbreviation Description")]);
        let output = summarize_document(&doc).unwrap();
        assert!(output.summary.is_empty());
        assert!(output.trace.is_empty());
    }

    #[test]
    fn test_ratings_only_read_from_sld_page() {
        let doc = Document::new(vec![
            PageContent::new(1, "MCCB 400A"),
            PageContent::new(2, "MCCB 250A"),
            PageContent::new(3, "MCCB 100 A"),
        ]);
        let output = summarize_document(&doc).unwrap();
        assert_eq!(output.summary.records.len(), 1);
        assert_eq!(output.summary.records[0].rating, "100A");
    }
}
