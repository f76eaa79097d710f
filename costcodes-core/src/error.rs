//! Error types for workbook reading and configuration

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source file absent. Informational: the company is skipped.
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// File present but unreadable, corrupt or in an unsupported format
    #[error("failed to read workbook {}: {source}", path.display())]
    WorkbookRead {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {} has no worksheets", .0.display())]
    EmptyWorkbook(PathBuf),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
