//! Movie list loading for the Golden Raspberry dataset.
//!
//! Splits quoted, delimiter-separated lines into fields and converts them
//! into [`Movie`] records. Bad lines are logged and skipped; they never abort
//! a load.

use std::path::Path;
use std::sync::OnceLock;

use awards_core::error::{AwardsError, RecordError, Result};
use awards_core::models::{CsvFormat, Movie};
use regex::Regex;
use tracing::{debug, warn};

/// Number of columns a line must have: year, title, studios, producers, winner.
pub const REQUIRED_FIELDS: usize = 5;

/// Years accepted in the first column.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

// ── Public types ──────────────────────────────────────────────────────────────

/// A data line that could not be converted into a [`Movie`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the input, header included.
    pub line_number: usize,
    pub line: String,
    pub reason: RecordError,
}

/// Everything one pass over the input produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDataset {
    pub movies: Vec<Movie>,
    pub rejected: Vec<RejectedLine>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse the whole dataset and return only the valid movies.
pub fn parse_movies(raw: &str, format: &CsvFormat) -> Vec<Movie> {
    parse_dataset(raw, format).movies
}

/// Parse the whole dataset, keeping track of rejected lines.
///
/// The first line is the header and is always skipped. Whitespace-only lines
/// are ignored without being reported.
pub fn parse_dataset(raw: &str, format: &CsvFormat) -> ParsedDataset {
    let mut dataset = ParsedDataset::default();

    for (index, line) in split_lines(raw).enumerate().skip(1) {
        if trim_field(line).is_empty() {
            continue;
        }

        match parse_record(line, format) {
            Ok(movie) => dataset.movies.push(movie),
            Err(reason) => {
                let line_number = index + 1;
                warn!("Skipping line {}: {} ({:?})", line_number, reason, line);
                dataset.rejected.push(RejectedLine {
                    line_number,
                    line: line.to_string(),
                    reason,
                });
            }
        }
    }

    debug!(
        "Parsed {} movies, rejected {} lines",
        dataset.movies.len(),
        dataset.rejected.len()
    );

    dataset
}

/// Read and parse a dataset file from disk.
pub fn read_movies_file(path: &Path, format: &CsvFormat) -> Result<ParsedDataset> {
    if !path.exists() {
        return Err(AwardsError::DataPathNotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path).map_err(|source| AwardsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_dataset(&raw, format))
}

/// Convert one data line into a [`Movie`].
pub fn parse_record(line: &str, format: &CsvFormat) -> std::result::Result<Movie, RecordError> {
    let fields = split_fields(line, format);
    if fields.len() < REQUIRED_FIELDS {
        return Err(RecordError::TooFewFields {
            expected: REQUIRED_FIELDS,
            found: fields.len(),
        });
    }

    let year = fields[0]
        .parse::<i32>()
        .ok()
        .filter(|year| YEAR_RANGE.contains(year))
        .ok_or_else(|| RecordError::MalformedYear(fields[0].clone()))?;

    Ok(Movie {
        year,
        title: fields[1].clone(),
        studios: fields[2].clone(),
        producers: parse_producers(&fields[3]),
        winner: fields[4].eq_ignore_ascii_case("yes"),
    })
}

/// Split a line on the delimiter, ignoring delimiters between quote marks.
///
/// Quote characters only toggle the quoted state and are dropped from the
/// output; there is no escape sequence for a literal quote. Every field is
/// trimmed of ASCII whitespace and control characters.
pub fn split_fields(line: &str, format: &CsvFormat) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == format.quote {
            in_quotes = !in_quotes;
        } else if c == format.delimiter && !in_quotes {
            fields.push(trim_field(&current).to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(trim_field(&current).to_string());

    fields
}

/// Split a producers column on commas and the word " and ".
///
/// A name that itself contains " and " is split too.
pub fn parse_producers(field: &str) -> Vec<String> {
    producer_separator()
        .split(field)
        .map(trim_field)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn producer_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR
        .get_or_init(|| Regex::new(r"(,| and )[ \t\n\x0B\f\r]*").expect("regex is valid"))
}

/// Split on `\n`, `\r\n` or a lone `\r`.
fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
    LINE_BREAK
        .get_or_init(|| Regex::new(r"\r\n|\r|\n").expect("regex is valid"))
        .split(raw)
}

/// Strip everything up to and including U+0020 from both ends.
///
/// Non-breaking and other Unicode spaces are kept as part of the value.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

// ── Tests ─────────────────────────────────────────────────────────────────────
