//! Shared domain layer for the Golden Raspberry producer-interval tool.
//!
//! Holds the record and report models, the error taxonomy, the CSV format
//! configuration and the command-line settings.

pub mod error;
pub mod models;
pub mod settings;
