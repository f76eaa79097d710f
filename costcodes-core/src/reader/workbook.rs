//! Row and cell data structures

use std::fmt;

/// A single worksheet row, anchored at column A
pub type Row = Vec<CellValue>;

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Zero and `false` carry no code and read as empty
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty | CellValue::Int(0) | CellValue::Boolean(false) => true,
            CellValue::Float(x) => *x == 0.0,
            CellValue::Int(_) | CellValue::Text(_) | CellValue::Boolean(true) => false,
        }
    }

    /// Coerce the cell to trimmed text. Blank cells yield an empty string.
    pub fn to_text(&self) -> String {
        match self {
            _ if self.is_blank() => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(i) => write!(f, "{}", i),
            // Whole floats print as integers: "100", not "100.0"
            CellValue::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 => {
                write!(f, "{}", *x as i64)
            }
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Boolean(true) => f.write_str("True"),
            CellValue::Boolean(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

/// Trimmed text of the cell at `col`, or empty when the row is too short
pub fn cell_text(row: &[CellValue], col: usize) -> String {
    row.get(col).map(CellValue::to_text).unwrap_or_default()
}
