pub mod pdftotext;
pub mod text;

use crate::error::SldError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

impl PageContent {
    pub fn new(page_number: usize, text: impl Into<String>) -> Self {
        PageContent {
            page_number,
            text: text.into(),
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SldError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// The extracted pages of one document, addressed by 1-based page number.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pages: Vec<PageContent>,
}

impl Document {
    pub fn new(pages: Vec<PageContent>) -> Self {
        Document { pages }
    }

    /// Run `extractor` over `pdf_bytes` and wrap the result.
    pub fn extract(pdf_bytes: &[u8], extractor: &dyn PdfExtractor) -> Result<Self, SldError> {
        let pages = extractor.extract_pages(pdf_bytes)?;
        tracing::debug!(
            backend = extractor.backend_name(),
            pages = pages.len(),
            "extracted document text"
        );
        Ok(Document::new(pages))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of the given 1-based page, or `None` when out of range.
    pub fn page_text(&self, page_number: usize) -> Option<&str> {
        if page_number == 0 {
            return None;
        }
        self.pages.get(page_number - 1).map(|p| p.text.as_str())
    }

    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_is_one_based() {
        let doc = Document::new(vec![
            PageContent::new(1, "cover"),
            PageContent::new(2, "legend"),
        ]);
        assert_eq!(doc.page_text(1), Some("cover"));
        assert_eq!(doc.page_text(2), Some("legend"));
    }

    #[test]
    fn test_page_text_out_of_range() {
        let doc = Document::new(vec![PageContent::new(1, "only page")]);
        assert_eq!(doc.page_text(0), None);
        assert_eq!(doc.page_text(3), None);
        assert_eq!(doc.page_count(), 1);
    }
}
