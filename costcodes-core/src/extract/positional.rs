//! Column-unknown fallback: classify cells by shape and position

use super::ExtractOptions;
use crate::reader::{Row, cell_text};
use crate::record::{CostCode, Extraction, Record};

/// Longest text still treated as a code when it does not start with a digit
const MAX_SHORT_CODE_LEN: usize = 10;

/// A cell looks like a code when it starts with a digit or is short
pub fn is_code_like(text: &str) -> bool {
    !text.is_empty()
        && (text.chars().next().is_some_and(|c| c.is_ascii_digit())
            || text.chars().count() <= MAX_SHORT_CODE_LEN)
}

/// Scan every cell in row-major order.
///
/// Code-like cells take the next cell in the row as their description.
/// Longer free text becomes a standalone record when it has not been seen as
/// a code or a description before, unless `keep_standalone_text` is off.
pub fn extract(rows: &[Row], options: &ExtractOptions) -> Extraction {
    let mut extraction = Extraction::new();

    for row in rows {
        for idx in 0..row.len() {
            let text = cell_text(row, idx);
            if text.is_empty() || options.reserved.contains(&text) {
                continue;
            }

            if is_code_like(&text) {
                if !extraction.contains_code(&text) {
                    let description = cell_text(row, idx + 1);
                    extraction.push(Record::Described(CostCode::new(text, description)));
                }
            } else if options.keep_standalone_text && !extraction.mentions(&text) {
                extraction.push(Record::Described(CostCode::new(text.clone(), text)));
            }
        }
    }

    extraction
}
