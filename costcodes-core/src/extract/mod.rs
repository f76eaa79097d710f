//! Cost code extraction over worksheet rows
//!
//! Every extractor here is a pure function from rows to an [`Extraction`].
//! Reading files is the reader's job; deciding which files to read is the
//! driver's.

pub mod header;
pub mod plain;
pub mod positional;
pub mod structured;

use crate::reader::Row;
use crate::record::Extraction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

pub use header::{Columns, detect_columns, is_header_row};

/// Header-like tokens that are never emitted as codes
pub const RESERVED_TOKENS: [&str; 6] = [
    "code",
    "cost code",
    "account",
    "item",
    "description",
    "type",
];

/// Case-insensitive set of reserved header tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedTokens {
    tokens: HashSet<String>,
}

impl ReservedTokens {
    /// Base tokens plus any extra ones (matched trimmed and lower-cased)
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reserved = Self::default();
        for token in extra {
            let token = token.as_ref().trim().to_lowercase();
            if !token.is_empty() {
                reserved.tokens.insert(token);
            }
        }
        reserved
    }

    /// Whether `text` matches a reserved token, ignoring case and surrounding whitespace
    pub fn contains(&self, text: &str) -> bool {
        self.tokens.contains(&text.trim().to_lowercase())
    }
}

impl Default for ReservedTokens {
    fn default() -> Self {
        Self {
            tokens: RESERVED_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Which extractor to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Bare codes from every cell, no descriptions
    Plain,
    /// Code and description records using header and positional heuristics
    #[default]
    Described,
}

/// Knobs shared by the extractors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub reserved: ReservedTokens,
    /// Emit long free-text cells as standalone records in the positional scan
    pub keep_standalone_text: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            reserved: ReservedTokens::default(),
            keep_standalone_text: true,
        }
    }
}

/// Run the extractor selected by `mode`
pub fn extract(rows: &[Row], mode: ExtractMode, options: &ExtractOptions) -> Extraction {
    match mode {
        ExtractMode::Plain => plain::extract(rows, &options.reserved),
        ExtractMode::Described => extract_described(rows, options),
    }
}

/// Description-aware extraction.
///
/// A header row picks the start row and, when it names a code column, the
/// structured path. Anything else falls back to the positional scan.
pub fn extract_described(rows: &[Row], options: &ExtractOptions) -> Extraction {
    let Some(first) = rows.first() else {
        return Extraction::new();
    };

    let has_header = is_header_row(first, &options.reserved);
    let columns = if has_header {
        detect_columns(first)
    } else {
        Columns::default()
    };
    let data = &rows[usize::from(has_header)..];
    debug!(
        has_header,
        code_col = ?columns.code_col,
        desc_col = ?columns.desc_col,
        "Detected layout"
    );

    match columns.code_col {
        Some(code_col) => structured::extract(data, code_col, columns.desc_col, &options.reserved),
        None => positional::extract(data, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::CellValue;
    use crate::record::Record;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| CellValue::from(*c)).collect()
    }

    #[test]
    fn test_reserved_tokens_ignore_case_and_whitespace() {
        let reserved = ReservedTokens::default();
        for token in RESERVED_TOKENS {
            assert!(reserved.contains(token));
            assert!(reserved.contains(&format!("  {}  ", token.to_uppercase())));
        }
        assert!(!reserved.contains("cost codes"));
        assert!(!reserved.contains("A100"));
    }

    #[test]
    fn test_extra_reserved_tokens() {
        let reserved = ReservedTokens::with_extra(["Cost Codes", "  "]);
        assert!(reserved.contains("COST CODES"));
        assert!(reserved.contains("code"));
        assert!(!reserved.contains(""));
    }

    #[test]
    fn test_column_detection_scenario() {
        let rows = vec![row(&["Cost Code", "Description"]), row(&["A100", "Excavation"])];
        let extraction = extract(&rows, ExtractMode::Described, &ExtractOptions::default());

        assert_eq!(
            extraction.records(),
            &[Record::Described(crate::record::CostCode::new("A100", "Excavation"))]
        );
    }

    #[test]
    fn test_header_without_code_column_uses_positional_scan() {
        // "Type" marks a header but names no code column
        let rows = vec![row(&["Type", "Notes"]), row(&["55", "Concrete Work"])];
        let extraction = extract_described(&rows, &ExtractOptions::default());

        assert_eq!(extraction.records()[0].code(), "55");
        assert_eq!(extraction.records()[0].description(), Some("Concrete Work"));
        // Header row itself is skipped
        assert!(!extraction.contains_code("Notes"));
    }

    #[test]
    fn test_empty_workbook() {
        assert!(extract(&[], ExtractMode::Described, &ExtractOptions::default()).is_empty());
        assert!(extract(&[], ExtractMode::Plain, &ExtractOptions::default()).is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let rows = vec![
            row(&["010", "Legal Fees", "011", "Surveying"]),
            Vec::new(),
            row(&["A long free-text remark", ""]),
        ];
        let options = ExtractOptions::default();
        assert_eq!(extract_described(&rows, &options), extract_described(&rows, &options));
    }
}
