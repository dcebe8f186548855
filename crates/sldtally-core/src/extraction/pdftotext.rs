use crate::error::SldError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// `with_layout(false)` runs in reading-order mode, which keeps legend rows
/// on one line each. `with_layout(true)` uses `pdftotext -layout`.
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn with_layout(layout: bool) -> Self {
        PdftotextExtractor { layout }
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SldError> {
        // The temp file is removed when `tmpfile` drops, on every return path.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| SldError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| SldError::Extraction(e.to_string()))?;

        let mut command = Command::new("pdftotext");
        if self.layout {
            command.arg("-layout");
        }
        let output = command
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SldError::PdftotextNotFound
                } else {
                    SldError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(SldError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages.
///
/// pdftotext terminates every page with a form feed, so the chunk after the
/// final `\x0c` is not a page. Blank pages in the middle are kept so that
/// page numbers stay aligned with the PDF.
pub(crate) fn split_pages(text: &str) -> Vec<PageContent> {
    let mut chunks: Vec<&str> = text.split('\x0c').collect();
    if chunks.len() > 1 && chunks.last().is_some_and(|c| c.trim().is_empty()) {
        chunks.pop();
    }

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, page_text)| PageContent::new(i + 1, page_text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_drops_trailing_form_feed() {
        let pages = split_pages("cover\x0clegend\x0csld\x0c");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].page_number, 3);
        assert_eq!(pages[2].text, "sld");
    }

    #[test]
    fn test_split_pages_keeps_blank_middle_page() {
        let pages = split_pages("cover\x0c\x0csld\x0c");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].text, "");
        assert_eq!(pages[2].text, "sld");
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(PdftotextExtractor::with_layout(false).backend_name(), "pdftotext");
        assert_eq!(PdftotextExtractor::with_layout(true).backend_name(), "pdftotext");
    }

    #[test]
    fn test_split_pages_without_form_feed() {
        let pages = split_pages("single page");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page_number, 1);
    }
}
