//! Header row detection and column role heuristics

use super::ReservedTokens;
use crate::reader::CellValue;

/// Column roles resolved from a header row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub code_col: Option<usize>,
    pub desc_col: Option<usize>,
}

/// A row is a header when any cell is exactly a reserved token
pub fn is_header_row(row: &[CellValue], reserved: &ReservedTokens) -> bool {
    row.iter().any(|cell| reserved.contains(&cell.to_text()))
}

/// Resolve code and description columns by substring match on header labels.
///
/// Matching is permissive ("Cost Code #", "Item No.", "Work Type" all count)
/// and the last matching column wins for each role.
pub fn detect_columns(header: &[CellValue]) -> Columns {
    let mut columns = Columns::default();
    for (idx, cell) in header.iter().enumerate() {
        let label = cell.to_text().to_lowercase();
        if ["code", "account", "item"].iter().any(|k| label.contains(k)) {
            columns.code_col = Some(idx);
        }
        if ["description", "type"].iter().any(|k| label.contains(k)) {
            columns.desc_col = Some(idx);
        }
    }
    columns
}
