use crate::extraction::Document;
use crate::model::{AbbreviationEntry, AbbreviationTable};

/// A page is a legend page when both column headers appear (case-sensitive).
pub fn is_legend_page(text: &str) -> bool {
    text.contains("Abbreviation") && text.contains("Description")
}

/// Build the abbreviation table from every legend page in the document.
///
/// A document without a legend yields an empty table.
pub fn load_abbreviations(document: &Document) -> AbbreviationTable {
    let mut entries = Vec::new();

    for page in document.pages() {
        if !is_legend_page(&page.text) {
            continue;
        }
        let parsed = parse_legend_text(&page.text);
        tracing::debug!(
            page = page.page_number,
            entries = parsed.len(),
            "parsed legend page"
        );
        entries.extend(parsed);
    }

    AbbreviationTable::new(entries)
}

/// Parse the lines of one legend page into entries, in page order.
pub fn parse_legend_text(text: &str) -> Vec<AbbreviationEntry> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_skipped_line(line))
        .filter_map(parse_legend_line)
        .collect()
}

/// Header rows, section numbers, and footer paths are not legend rows.
fn is_skipped_line(line: &str) -> bool {
    starts_with_ignore_case(line, "Abbreviation")
        || line.starts_with("3.")
        || line.contains(".docx")
        || line.contains('/')
}

/// Split a legend row at its first space into code and description.
fn parse_legend_line(line: &str) -> Option<AbbreviationEntry> {
    let (code, description) = line.split_once(' ')?;
    let code = code.trim();
    if code.chars().count() < 2 {
        return None;
    }
    Some(AbbreviationEntry::new(code, description.trim()))
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::PageContent;

    #[test]
    fn test_parse_legend_excludes_header() {
        let entries = parse_legend_text(
            "ABBREVIATION DESCRIPTION\nMCCB Molded Case Circuit Breaker\nACB Air Circuit Breaker\n",
        );
        assert_eq!(
            entries,
            vec![
                AbbreviationEntry::new("MCCB", "Molded Case Circuit Breaker"),
                AbbreviationEntry::new("ACB", "Air Circuit Breaker"),
            ]
        );
    }

    #[test]
    fn test_parse_legend_handles_crlf_and_padding() {
        let entries = parse_legend_text("\r\n   MCB   Miniature Circuit Breaker  \r\n\r\n");
        assert_eq!(
            entries,
            vec![AbbreviationEntry::new("MCB", "Miniature Circuit Breaker")]
        );
    }

    #[test]
    fn test_parse_legend_skips_noise_lines() {
        let entries = parse_legend_text(
            "3. ABBREVIATIONS\n\
             SLD-Legend.docx page 2\n\
             A/C Air Conditioning\n\
             CT Current Transformer\n",
        );
        assert_eq!(entries, vec![AbbreviationEntry::new("CT", "Current Transformer")]);
    }

    #[test]
    fn test_parse_legend_skips_short_codes_and_single_words() {
        let entries = parse_legend_text("A Ampere\nLEGEND\nVT Voltage Transformer");
        assert_eq!(entries, vec![AbbreviationEntry::new("VT", "Voltage Transformer")]);
    }

    #[test]
    fn test_description_keeps_inner_spacing() {
        let entries = parse_legend_text("ACB    Air   Circuit Breaker");
        assert_eq!(entries[0].code, "ACB");
        assert_eq!(entries[0].description, "Air   Circuit Breaker");
    }

    #[test]
    fn test_is_legend_page_is_case_sensitive() {
        assert!(is_legend_page("Abbreviation   Description"));
        assert!(!is_legend_page("ABBREVIATION DESCRIPTION"));
        assert!(!is_legend_page("Abbreviation only"));
    }

    #[test]
    fn test_load_collects_all_legend_pages() {
        let doc = Document::new(vec![
            PageContent::new(1, "Cover sheet"),
            PageContent::new(2, "Abbreviation Description\nACB Air Circuit Breaker"),
            PageContent::new(3, "MCCB 100A"),
            PageContent::new(4, "Abbreviation Description\nMCCB Molded Case Circuit Breaker"),
        ]);
        let table = load_abbreviations(&doc);
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("ACB"), Some("Air Circuit Breaker"));
        assert_eq!(table.lookup("MCCB"), Some("Molded Case Circuit Breaker"));
    }

    #[test]
    fn test_load_without_legend_is_empty() {
        let doc = Document::new(vec![PageContent::new(1, "MCCB 100A")]);
        assert!(load_abbreviations(&doc).is_empty());
    }
}
