//! Data layer for the Golden Raspberry producer-interval tool.
//!
//! Parses the semicolon-delimited movie list, keeps the movies in a
//! repository and computes the producer win-interval report.

pub mod analysis;
pub mod analyzer;
pub mod reader;
pub mod repository;

pub use awards_core as core;
