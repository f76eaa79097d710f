//! Column-known extraction

use super::ReservedTokens;
use crate::reader::{Row, cell_text};
use crate::record::{CostCode, Extraction, Record};

/// Read codes from `code_col` and descriptions from `desc_col`.
///
/// Rows with an empty or reserved code are skipped. Missing cells read as
/// empty text.
pub fn extract(
    rows: &[Row],
    code_col: usize,
    desc_col: Option<usize>,
    reserved: &ReservedTokens,
) -> Extraction {
    let mut extraction = Extraction::new();

    for row in rows.iter().filter(|row| !row.is_empty()) {
        let code = cell_text(row, code_col);
        if code.is_empty() || reserved.contains(&code) || extraction.contains_code(&code) {
            continue;
        }
        let description = desc_col.map(|col| cell_text(row, col)).unwrap_or_default();
        extraction.push(Record::Described(CostCode::new(code, description)));
    }

    extraction
}
