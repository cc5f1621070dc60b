use serde::{Deserialize, Serialize};

use crate::error::{AwardsError, Result};

/// Default column separator of the movie list.
pub const DEFAULT_DELIMITER: char = ';';

/// Default quote marker of the movie list.
pub const DEFAULT_QUOTE: char = '"';

/// One nominated movie read from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Award ceremony year.
    pub year: i32,
    /// Movie title.
    pub title: String,
    /// Studios column, kept verbatim.
    pub studios: String,
    /// Producer names in column order. Duplicates are kept.
    pub producers: Vec<String>,
    /// `true` when the movie won the award that year.
    pub winner: bool,
}

/// Consecutive wins of one producer and the gap between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    /// Years between `previous_win` and `following_win`; always positive.
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

impl ProducerInterval {
    /// Build the entry for two wins, `previous_win` strictly before
    /// `following_win`.
    ///
    /// Returns `None` when the years are not in order or their difference
    /// does not fit an `i32`.
    pub fn between(
        producer: impl Into<String>,
        previous_win: i32,
        following_win: i32,
    ) -> Option<Self> {
        let interval = following_win
            .checked_sub(previous_win)
            .filter(|gap| *gap > 0)?;
        Some(Self {
            producer: producer.into(),
            interval,
            previous_win,
            following_win,
        })
    }
}

/// Producers holding the shortest and the longest gap between two wins.
///
/// Every entry in `min` shares the global minimum interval and every entry in
/// `max` the global maximum. Both lists are empty when nobody won twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerIntervalReport {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl ProducerIntervalReport {
    /// The report returned when no producer has two distinct winning years.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }

    /// Serialise the report as compact or indented JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Field delimiter and quote marker used to split dataset lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvFormat {
    pub delimiter: char,
    pub quote: char,
}

impl CsvFormat {
    /// Create a format, rejecting a delimiter that doubles as the quote marker.
    pub fn new(delimiter: char, quote: char) -> Result<Self> {
        if delimiter == quote {
            return Err(AwardsError::Config(format!(
                "delimiter and quote character must differ (both are {delimiter:?})"
            )));
        }
        Ok(Self { delimiter, quote })
    }
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
        }
    }
}
