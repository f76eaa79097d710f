//! Plain code extraction: every non-reserved cell is a code

use super::ReservedTokens;
use crate::reader::Row;
use crate::record::{Extraction, Record};

/// Collect bare codes from every cell of every row, header included
pub fn extract(rows: &[Row], reserved: &ReservedTokens) -> Extraction {
    let mut extraction = Extraction::new();

    for cell in rows.iter().flatten() {
        let code = cell.to_text();
        if code.is_empty() || reserved.contains(&code) {
            continue;
        }
        extraction.push(Record::Code(code));
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::CellValue;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| CellValue::from(*c)).collect()
    }

    fn codes(extraction: &Extraction) -> Vec<&str> {
        extraction.records().iter().map(Record::code).collect()
    }

    #[test]
    fn test_plain_codes_in_scan_order() {
        let rows = vec![
            row(&["Cost Code", "Description"]),
            row(&["001", "Beginning Balance"]),
            Vec::new(),
            row(&["005", "Lot Cost"]),
            row(&["001", "Beginning Balance"]),
        ];
        let extraction = extract(&rows, &ReservedTokens::default());
        assert_eq!(
            codes(&extraction),
            vec!["001", "Beginning Balance", "005", "Lot Cost"]
        );
    }

    #[test]
    fn test_non_exact_header_labels_leak() {
        let rows = vec![row(&["Cost Codes", "CODE"])];
        let extraction = extract(&rows, &ReservedTokens::default());
        assert_eq!(codes(&extraction), vec!["Cost Codes"]);
    }

    #[test]
    fn test_numbers_are_coerced() {
        let rows = vec![vec![CellValue::Int(31), CellValue::Float(31.0), CellValue::Float(2.5)]];
        let extraction = extract(&rows, &ReservedTokens::default());
        assert_eq!(codes(&extraction), vec!["31", "2.5"]);
    }

    #[test]
    fn test_zero_and_false_cells_are_skipped() {
        let rows = vec![vec![
            CellValue::Int(0),
            CellValue::Boolean(false),
            CellValue::Float(0.0),
            CellValue::Boolean(true),
        ]];
        let extraction = extract(&rows, &ReservedTokens::default());
        assert_eq!(codes(&extraction), vec!["True"]);
    }
}
