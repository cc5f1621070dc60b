use std::path::PathBuf;
use thiserror::Error;

/// Why a single dataset line could not be turned into a movie record.
///
/// These never abort a load: the offending line is logged and skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line split into fewer fields than the fixed column layout needs.
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// The year column is not an integer.
    #[error("malformed year: {0:?}")]
    MalformedYear(String),
}

/// All errors produced by the awards crates.
#[derive(Error, Debug)]
pub enum AwardsError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset file does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// A report could not be serialised.
    #[error("Failed to serialise JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the awards crates.
pub type Result<T> = std::result::Result<T, AwardsError>;
