use crate::error::SldError;
use crate::extraction::pdftotext::split_pages;
use crate::extraction::{PageContent, PdfExtractor};

/// Backend for text that was already extracted from a PDF.
///
/// Pages are separated by form feeds, the same convention pdftotext uses,
/// so `pdftotext drawing.pdf drawing.txt` output can be fed back in as is.
pub struct TextExtractor;

impl PdfExtractor for TextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, SldError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| SldError::Extraction(format!("text input is not UTF-8: {e}")))?;
        Ok(split_pages(text))
    }

    fn backend_name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_backend_splits_on_form_feed() {
        let pages = TextExtractor
            .extract_pages(b"one\x0ctwo\x0cthree\x0c")
            .unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].text, "two");
    }

    #[test]
    fn test_text_backend_rejects_invalid_utf8() {
        let err = TextExtractor.extract_pages(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, SldError::Extraction(_)));
    }
}
