use serde::Serialize;

/// Column headers shared by the display and spreadsheet sinks.
pub const SUMMARY_COLUMNS: [&str; 4] = ["BreakerType", "Current", "Poles", "Count"];

/// One row of the document's abbreviation legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbbreviationEntry {
    pub code: String,
    pub description: String,
}

impl AbbreviationEntry {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        AbbreviationEntry {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Code -> description table built from every legend page of a document.
///
/// Codes are not required to be unique; lookups return the first entry
/// with a matching code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AbbreviationTable {
    entries: Vec<AbbreviationEntry>,
}

impl AbbreviationTable {
    pub fn new(entries: Vec<AbbreviationEntry>) -> Self {
        AbbreviationTable { entries }
    }

    pub fn entries(&self) -> &[AbbreviationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Description of the first entry whose code equals `code` exactly.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.description.as_str())
    }

    /// Resolve a type code to its description, defaulting to the code itself.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.lookup(code).unwrap_or(code)
    }
}

impl FromIterator<AbbreviationEntry> for AbbreviationTable {
    fn from_iter<I: IntoIterator<Item = AbbreviationEntry>>(iter: I) -> Self {
        AbbreviationTable::new(iter.into_iter().collect())
    }
}

/// A single physical breaker inferred from the drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakerInstance {
    /// Raw type code, e.g. "MCCB" or "ACB".
    pub breaker_type: String,
    /// Canonical rating token, e.g. "200A".
    pub rating: String,
    pub poles: String,
}

impl BreakerInstance {
    pub fn new(
        breaker_type: impl Into<String>,
        rating: impl Into<String>,
        poles: impl Into<String>,
    ) -> Self {
        BreakerInstance {
            breaker_type: breaker_type.into(),
            rating: rating.into(),
            poles: poles.into(),
        }
    }
}

/// One grouped line of the final inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    #[serde(rename = "BreakerType")]
    pub breaker_type: String,
    #[serde(rename = "Current")]
    pub rating: String,
    #[serde(rename = "Poles")]
    pub poles: String,
    #[serde(rename = "Count")]
    pub count: usize,
}

impl SummaryRecord {
    /// Cell values in `SUMMARY_COLUMNS` order, all rendered as text.
    pub fn cells(&self) -> [String; 4] {
        [
            self.breaker_type.clone(),
            self.rating.clone(),
            self.poles.clone(),
            self.count.to_string(),
        ]
    }
}

/// Display-ready breaker inventory, sorted by descending rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BreakerSummary {
    pub records: Vec<SummaryRecord>,
}

impl BreakerSummary {
    pub fn total_count(&self) -> usize {
        self.records.iter().map(|r| r.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
