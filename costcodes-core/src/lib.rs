//! costcodes-core: cost code extraction from vendor spreadsheets
//!
//! Reads one worksheet per company, finds cost codes (and descriptions when
//! asked) with header and positional heuristics, and collects the results
//! keyed by company.

pub mod config;
pub mod error;
pub mod extract;
pub mod reader;
pub mod record;

use std::path::Path;
use tracing::{error, info, warn};

pub use config::{CompanySource, ExtractorConfig};
pub use error::{ExtractError, Result};
pub use extract::{ExtractMode, ExtractOptions, ReservedTokens};
pub use record::{CompanyResults, CostCode, Extraction, Record, Summary};

/// Main extractor interface
pub struct Extractor {
    config: ExtractorConfig,
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor with the built-in company list
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor with custom configuration
    pub fn with_config(config: ExtractorConfig) -> Self {
        let options = config.options();
        Self { config, options }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read one spreadsheet and extract its records
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let rows = reader::read_rows(path)?;
        Ok(extract::extract(&rows, self.config.mode, &self.options))
    }

    /// Process every configured company in order.
    ///
    /// Missing files are skipped. Unreadable files are logged and recorded
    /// with an empty result. Nothing here aborts the run.
    pub fn run(&self) -> CompanyResults {
        let mut results = CompanyResults::new();

        for company in &self.config.companies {
            let path = self.config.resolve_path(company);
            if !path.exists() {
                warn!(company = %company.name, path = %path.display(), "File not found");
                continue;
            }

            info!(company = %company.name, path = %path.display(), "Reading cost codes");
            match self.extract_file(&path) {
                Ok(extraction) => {
                    info!(company = %company.name, count = extraction.len(), "Found cost codes");
                    results.insert(company.name.clone(), extraction.into_records());
                }
                Err(ExtractError::MissingFile(path)) => {
                    warn!(company = %company.name, path = %path.display(), "File not found");
                }
                Err(err) => {
                    error!(
                        company = %company.name,
                        path = %path.display(),
                        error = %err,
                        "Failed to extract cost codes"
                    );
                    results.insert(company.name.clone(), Vec::new());
                }
            }
        }

        results
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
