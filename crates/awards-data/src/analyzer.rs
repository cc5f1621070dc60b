//! Producer win-interval analyser.
//!
//! Groups winning movies by producer, measures the gap between each pair of
//! consecutive wins and keeps the producers sitting on the shortest and the
//! longest gap.

use std::collections::HashMap;

use awards_core::models::{Movie, ProducerInterval, ProducerIntervalReport};
use tracing::{debug, warn};

// ── WinHistory ────────────────────────────────────────────────────────────────

/// All winning years of one producer, in the order they were seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerWins {
    pub producer: String,
    pub years: Vec<i32>,
}

/// Winning years keyed by exact producer name.
///
/// Iterates producers in first-seen order, which fixes the order of tied
/// entries in the final report.
#[derive(Debug, Clone, Default)]
pub struct WinHistory {
    producers: Vec<ProducerWins>,
    index: HashMap<String, usize>,
}

impl WinHistory {
    /// Record a win of `producer` in `year`.
    pub fn record(&mut self, producer: &str, year: i32) {
        match self.index.get(producer) {
            Some(&slot) => self.producers[slot].years.push(year),
            None => {
                self.index.insert(producer.to_string(), self.producers.len());
                self.producers.push(ProducerWins {
                    producer: producer.to_string(),
                    years: vec![year],
                });
            }
        }
    }

    /// Years recorded for `producer`, unsorted.
    pub fn years_of(&self, producer: &str) -> Option<&[i32]> {
        self.index
            .get(producer)
            .map(|&slot| self.producers[slot].years.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProducerWins> {
        self.producers.iter()
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }
}

// ── IntervalAnalyzer ──────────────────────────────────────────────────────────

/// Stateless helper that turns winning movies into a [`ProducerIntervalReport`].
pub struct IntervalAnalyzer;

impl IntervalAnalyzer {
    /// Run the whole analysis over `winners`.
    ///
    /// The input is expected to hold winners only, ordered by year; the order
    /// only affects which tied producer is listed first.
    pub fn analyze(winners: &[Movie]) -> ProducerIntervalReport {
        let history = Self::group_wins(winners);
        debug!("Grouped wins for {} producers", history.len());

        let intervals = Self::intervals(&history);
        debug!("Computed {} producer intervals", intervals.len());

        Self::select_extremes(&intervals)
    }

    /// Collect every producer's winning years.
    ///
    /// Movies that did not win are ignored.
    pub fn group_wins(movies: &[Movie]) -> WinHistory {
        let mut history = WinHistory::default();
        for movie in movies.iter().filter(|m| m.winner) {
            for producer in &movie.producers {
                history.record(producer, movie.year);
            }
        }
        history
    }

    /// One entry per pair of consecutive distinct winning years.
    ///
    /// A producer credited twice in the same year counts that year once, so
    /// every interval is positive. Producers with a single winning year
    /// contribute nothing.
    pub fn intervals(history: &WinHistory) -> Vec<ProducerInterval> {
        let mut intervals = Vec::new();

        for wins in history.iter() {
            let mut years = wins.years.clone();
            years.sort_unstable();
            years.dedup();

            for pair in years.windows(2) {
                match ProducerInterval::between(wins.producer.as_str(), pair[0], pair[1]) {
                    Some(interval) => intervals.push(interval),
                    None => warn!(
                        "Skipping {} -> {} for {}: gap does not fit in a year count",
                        pair[0], pair[1], wins.producer
                    ),
                }
            }
        }

        intervals
    }

    /// Keep the entries equal to the global minimum and maximum interval.
    ///
    /// Generation order is preserved inside both lists.
    pub fn select_extremes(intervals: &[ProducerInterval]) -> ProducerIntervalReport {
        let (Some(min), Some(max)) = (
            intervals.iter().map(|i| i.interval).min(),
            intervals.iter().map(|i| i.interval).max(),
        ) else {
            return ProducerIntervalReport::empty();
        };

        debug!("Shortest interval {} years, longest {} years", min, max);

        ProducerIntervalReport {
            min: intervals
                .iter()
                .filter(|i| i.interval == min)
                .cloned()
                .collect(),
            max: intervals
                .iter()
                .filter(|i| i.interval == max)
                .cloned()
                .collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
