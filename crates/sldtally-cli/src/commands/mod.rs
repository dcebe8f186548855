pub mod abbreviations;
pub mod rules;
pub mod summarize;

use sldtally_core::error::SldError;
use sldtally_core::extraction::pdftotext::PdftotextExtractor;
use sldtally_core::extraction::text::TextExtractor;
use sldtally_core::extraction::{Document, PdfExtractor};
use std::path::Path;

/// Read `input_file` and extract its pages, choosing the backend by extension.
pub fn load_document(input_file: &Path, layout: bool) -> Result<Document, SldError> {
    let bytes = std::fs::read(input_file)?;
    let is_text = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    let extractor: Box<dyn PdfExtractor> = if is_text {
        Box::new(TextExtractor)
    } else {
        Box::new(PdftotextExtractor::with_layout(layout))
    };
    let document = Document::extract(&bytes, extractor.as_ref())?;
    tracing::info!(
        input = %input_file.display(),
        backend = extractor.backend_name(),
        pages = document.page_count(),
        "loaded drawing"
    );
    Ok(document)
}
