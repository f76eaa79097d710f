//! Configuration: which company files to read and how to extract them

use crate::error::{ExtractError, Result};
use crate::extract::{ExtractMode, ExtractOptions, ReservedTokens};
use directories_next::BaseDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Main extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default)]
    pub mode: ExtractMode,
    /// Directory that relative company files resolve against.
    /// Defaults to `<home>/Downloads`.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    #[serde(default = "default_keep_standalone_text")]
    pub keep_standalone_text: bool,
    /// Extra header tokens to ignore, on top of the built-in set
    #[serde(default)]
    pub extra_reserved_tokens: Vec<String>,
    /// Companies in output order
    #[serde(default = "default_companies")]
    pub companies: Vec<CompanySource>,
}

/// One company and its spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySource {
    pub name: String,
    pub file: PathBuf,
}

impl CompanySource {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ExtractError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ExtractorConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Reject empty or duplicated company names
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for company in &self.companies {
            let name = company.name.trim();
            if name.is_empty() {
                return Err(ExtractError::Config(
                    "company name must not be empty".to_string(),
                ));
            }
            if !seen.insert(name) {
                return Err(ExtractError::Config(format!(
                    "company '{}' is listed more than once",
                    name
                )));
            }
            if company.file.as_os_str().is_empty() {
                return Err(ExtractError::Config(format!(
                    "company '{}' has no file",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Directory relative company files are resolved against
    pub fn base_dir(&self) -> PathBuf {
        match &self.base_dir {
            Some(dir) => expand_home(dir),
            None => default_download_dir(),
        }
    }

    /// Full path of a company's spreadsheet
    pub fn resolve_path(&self, company: &CompanySource) -> PathBuf {
        let file = expand_home(&company.file);
        if file.is_absolute() {
            file
        } else {
            self.base_dir().join(file)
        }
    }

    /// Extractor options derived from this configuration
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            reserved: ReservedTokens::with_extra(&self.extra_reserved_tokens),
            keep_standalone_text: self.keep_standalone_text,
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            mode: ExtractMode::default(),
            base_dir: None,
            keep_standalone_text: default_keep_standalone_text(),
            extra_reserved_tokens: Vec::new(),
            companies: default_companies(),
        }
    }
}

fn default_keep_standalone_text() -> bool {
    true
}

fn default_companies() -> Vec<CompanySource> {
    vec![
        CompanySource::new("JLC", "JLC Cost Codes.xlsx"),
        CompanySource::new("SHOA", "SHOACostCodes.xlsx"),
        CompanySource::new("CDC", "CDCcostcodes.xlsx"),
    ]
}

/// `<home>/Downloads`, or `Downloads` in the working directory when no home is known
pub fn default_download_dir() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join("Downloads"))
        .unwrap_or_else(|| PathBuf::from("Downloads"))
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match BaseDirs::new() {
            Some(dirs) => dirs.home_dir().join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
