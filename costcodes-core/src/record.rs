//! Extracted records and per-company result sets

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashSet;

/// A cost code paired with its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostCode {
    pub code: String,
    pub description: String,
}

impl CostCode {
    /// Create a cost code; an empty description falls back to the code itself
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        let code = code.into();
        let description = description.into();
        let description = if description.is_empty() {
            code.clone()
        } else {
            description
        };
        Self { code, description }
    }
}

/// One extracted output unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// Bare code (plain mode)
    Code(String),
    /// Code with description (described mode)
    Described(CostCode),
}

impl Record {
    pub fn code(&self) -> &str {
        match self {
            Record::Code(code) => code,
            Record::Described(cc) => &cc.code,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Record::Code(_) => None,
            Record::Described(cc) => Some(&cc.description),
        }
    }
}

/// Ordered records, unique by code. The first record for a code wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    records: Vec<Record>,
    codes: HashSet<String>,
    descriptions: HashSet<String>,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record unless its code is already present.
    /// Returns whether the record was added.
    pub fn push(&mut self, record: Record) -> bool {
        if self.codes.contains(record.code()) {
            return false;
        }
        self.codes.insert(record.code().to_string());
        if let Some(description) = record.description() {
            self.descriptions.insert(description.to_string());
        }
        self.records.push(record);
        true
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Whether `text` was already seen as a code or as a description
    pub fn mentions(&self, text: &str) -> bool {
        self.codes.contains(text) || self.descriptions.contains(text)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Extraction results keyed by company, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyResults {
    entries: Vec<(String, Vec<Record>)>,
}

impl CompanyResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the records for a company
    pub fn insert(&mut self, company: impl Into<String>, records: Vec<Record>) {
        let company = company.into();
        match self.entries.iter_mut().find(|(name, _)| *name == company) {
            Some((_, existing)) => *existing = records,
            None => self.entries.push((company, records)),
        }
    }

    pub fn get(&self, company: &str) -> Option<&[Record]> {
        self.entries
            .iter()
            .find(|(name, _)| name == company)
            .map(|(_, records)| records.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.entries
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let companies: Vec<(String, usize)> = self
            .entries
            .iter()
            .map(|(name, records)| (name.clone(), records.len()))
            .collect();
        let total = companies.iter().map(|(_, count)| count).sum();
        Summary { companies, total }
    }
}

impl Serialize for CompanyResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (company, records) in &self.entries {
            map.serialize_entry(company, records)?;
        }
        map.end()
    }
}

/// Per-company record counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub companies: Vec<(String, usize)>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_record_wins() {
        let mut extraction = Extraction::new();
        assert!(extraction.push(Record::Described(CostCode::new("100", "Labor"))));
        assert!(!extraction.push(Record::Described(CostCode::new("100", "Labor2"))));

        assert_eq!(extraction.len(), 1);
        assert_eq!(extraction.records()[0].description(), Some("Labor"));
    }

    #[test]
    fn test_description_defaults_to_code() {
        let cc = CostCode::new("A100", "");
        assert_eq!(cc.description, "A100");
    }

    #[test]
    fn test_mentions_codes_and_descriptions() {
        let mut extraction = Extraction::new();
        extraction.push(Record::Described(CostCode::new("55", "Concrete Work")));
        assert!(extraction.mentions("55"));
        assert!(extraction.mentions("Concrete Work"));
        assert!(!extraction.contains_code("Concrete Work"));
    }

    #[test]
    fn test_results_keep_insertion_order() {
        let mut results = CompanyResults::new();
        results.insert("JLC", vec![Record::Code("001".to_string())]);
        results.insert("CDC", vec![]);
        results.insert("AAA", vec![Record::Code("9".to_string())]);

        let names: Vec<&str> = results.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["JLC", "CDC", "AAA"]);

        let summary = results.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.companies[1], ("CDC".to_string(), 0));
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut results = CompanyResults::new();
        results.insert("JLC", vec![]);
        results.insert("JLC", vec![Record::Code("1".to_string())]);
        assert_eq!(results.len(), 1);
        assert_eq!(results.get("JLC").map(<[Record]>::len), Some(1));
    }
}
