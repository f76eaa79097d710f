//! Excel/ODS file reader using calamine

use crate::error::{ExtractError, Result};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::path::Path;
use tracing::debug;

pub mod workbook;

pub use workbook::{CellValue, Row, cell_text};

/// Read the first worksheet of a workbook into rows.
///
/// The workbook is opened, scanned and dropped before returning. Rows are
/// anchored at A1: blank leading rows come back as empty rows and blank
/// leading columns as `CellValue::Empty` cells.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ExtractError::MissingFile(path.to_path_buf()));
    }

    let mut excel: Sheets<_> =
        open_workbook_auto(path).map_err(|source| ExtractError::WorkbookRead {
            path: path.to_path_buf(),
            source,
        })?;

    let range = excel
        .worksheet_range_at(0)
        .ok_or_else(|| ExtractError::EmptyWorkbook(path.to_path_buf()))?
        .map_err(|source| ExtractError::WorkbookRead {
            path: path.to_path_buf(),
            source,
        })?;

    let rows = range_to_rows(&range);
    debug!(path = %path.display(), rows = rows.len(), "Read worksheet");
    Ok(rows)
}

/// Convert a calamine range into A1-anchored rows
pub fn range_to_rows(range: &Range<Data>) -> Vec<Row> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    if range.is_empty() {
        return Vec::new();
    }

    let mut rows: Vec<Row> = (0..start_row).map(|_| Vec::new()).collect();
    for data_row in range.rows() {
        let mut row = vec![CellValue::Empty; start_col as usize];
        row.extend(data_row.iter().map(parse_cell_value));
        rows.push(row);
    }
    rows
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
