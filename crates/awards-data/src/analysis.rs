//! Load-then-analyse pipeline.
//!
//! Reads the movie list into a [`MovieRepository`] and computes the
//! [`ProducerIntervalReport`] from the stored winners.

use std::path::Path;

use awards_core::error::Result;
use awards_core::models::{CsvFormat, ProducerIntervalReport};
use serde::Serialize;
use tracing::info;

use crate::analyzer::IntervalAnalyzer;
use crate::reader::{parse_dataset, read_movies_file, ParsedDataset};
use crate::repository::MovieRepository;

// ── Public types ──────────────────────────────────────────────────────────────

/// What a single load stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// File path, or a label for in-memory input.
    pub source: String,
    pub movies_loaded: usize,
    pub winners: usize,
    pub lines_rejected: usize,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Read the movie list at `path` and store every valid movie in `repo`.
pub fn load_movies<R>(path: &Path, format: &CsvFormat, repo: &mut R) -> Result<LoadSummary>
where
    R: MovieRepository + ?Sized,
{
    info!("Loading movie list from {}", path.display());
    let dataset = read_movies_file(path, format)?;
    Ok(store_dataset(path.display().to_string(), dataset, repo))
}

/// Same as [`load_movies`] for a dataset already held in memory.
pub fn load_movies_from_str<R>(raw: &str, format: &CsvFormat, repo: &mut R) -> LoadSummary
where
    R: MovieRepository + ?Sized,
{
    store_dataset("<memory>".to_string(), parse_dataset(raw, format), repo)
}

/// Compute the shortest and longest producer win intervals from `repo`.
pub fn producers_intervals<R>(repo: &R) -> ProducerIntervalReport
where
    R: MovieRepository + ?Sized,
{
    let winners = repo.find_winners_ordered_by_year_asc();
    info!("Found {} winning movies", winners.len());

    let report = IntervalAnalyzer::analyze(&winners);

    match (report.min.first(), report.max.first()) {
        (Some(min), Some(max)) => info!(
            "Shortest interval {} years ({} entries), longest {} years ({} entries)",
            min.interval,
            report.min.len(),
            max.interval,
            report.max.len()
        ),
        _ => info!("No producer has won more than once"),
    }

    report
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn store_dataset<R>(source: String, dataset: ParsedDataset, repo: &mut R) -> LoadSummary
where
    R: MovieRepository + ?Sized,
{
    let summary = LoadSummary {
        source,
        movies_loaded: dataset.movies.len(),
        winners: dataset.movies.iter().filter(|m| m.winner).count(),
        lines_rejected: dataset.rejected.len(),
    };

    repo.save_all(dataset.movies);

    info!(
        "Loaded {} movies ({} winners) from {}, skipped {} lines",
        summary.movies_loaded, summary.winners, summary.source, summary.lines_rejected
    );

    summary
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryMovieRepository;
    use awards_core::error::AwardsError;
    use awards_core::models::ProducerInterval;
    use tempfile::TempDir;

    const SAMPLE: &str = include_str!("../../../data/movielist.csv");

    fn loaded_sample() -> InMemoryMovieRepository {
        let mut repo = InMemoryMovieRepository::new();
        load_movies_from_str(SAMPLE, &CsvFormat::default(), &mut repo);
        repo
    }

    // ── load_movies ───────────────────────────────────────────────────────────

    #[test]
    fn test_load_movies_from_str_sample() {
        let mut repo = InMemoryMovieRepository::new();
        let summary = load_movies_from_str(SAMPLE, &CsvFormat::default(), &mut repo);

        assert_eq!(summary.movies_loaded, 34);
        assert_eq!(summary.winners, 27);
        assert_eq!(summary.lines_rejected, 0);
        assert_eq!(repo.count(), 34);
    }

    #[test]
    fn test_load_movies_quoted_title_unwrapped() {
        let repo = loaded_sample();
        assert!(repo
            .find_all()
            .iter()
            .any(|m| m.title == "An Alan Smithee Film: Burn Hollywood Burn"));
    }

    #[test]
    fn test_load_movies_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movielist.csv");
        std::fs::write(
            &path,
            "year;title;studios;producers;winner\n\
             1990;A;S;Joel Silver;yes\n\
             broken line\n\
             1991;B;S;Joel Silver;yes\n",
        )
        .unwrap();

        let mut repo = InMemoryMovieRepository::new();
        let summary = load_movies(&path, &CsvFormat::default(), &mut repo).unwrap();

        assert_eq!(summary.movies_loaded, 2);
        assert_eq!(summary.lines_rejected, 1);
        assert_eq!(summary.source, path.display().to_string());
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_load_movies_missing_file_stores_nothing() {
        let dir = TempDir::new().unwrap();
        let mut repo = InMemoryMovieRepository::new();

        let err = load_movies(&dir.path().join("nope.csv"), &CsvFormat::default(), &mut repo)
            .unwrap_err();

        assert!(matches!(err, AwardsError::DataPathNotFound(_)));
        assert_eq!(repo.count(), 0);
    }

    // ── producers_intervals ───────────────────────────────────────────────────

    #[test]
    fn test_producers_intervals_sample() {
        let repo = loaded_sample();
        let report = producers_intervals(&repo);

        assert_eq!(
            report.min,
            vec![ProducerInterval::between("Joel Silver", 1990, 1991).unwrap()]
        );
        assert_eq!(
            report.max,
            vec![ProducerInterval::between("Matthew Vaughn", 2002, 2015).unwrap()]
        );
    }

    #[test]
    fn test_producers_intervals_all_positive() {
        let report = producers_intervals(&loaded_sample());
        assert!(!report.min.is_empty());
        assert!(!report.max.is_empty());
        assert!(report
            .min
            .iter()
            .chain(report.max.iter())
            .all(|i| i.interval > 0 && i.following_win - i.previous_win == i.interval));
    }

    #[test]
    fn test_producers_intervals_no_data() {
        let mut repo = loaded_sample();
        repo.delete_all();

        let report = producers_intervals(&repo);
        assert_eq!(report, ProducerIntervalReport::empty());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"min": [], "max": []})
        );
    }

    #[test]
    fn test_producers_intervals_ignores_non_winners() {
        // Golan and Globus are only nominated, in 1983 and 1987.
        let repo = loaded_sample();
        let winners = repo.find_winners_ordered_by_year_asc();
        assert!(winners
            .iter()
            .all(|m| !m.producers.iter().any(|p| p == "Menahem Golan")));

        let report = producers_intervals(&repo);
        assert!(report
            .min
            .iter()
            .chain(report.max.iter())
            .all(|i| i.producer != "Menahem Golan" && i.producer != "Yoram Globus"));
    }

    #[test]
    fn test_producers_intervals_ties_follow_year_order() {
        let raw = "year;title;studios;producers;winner\n\
                   2001;C;S;Late Starter;yes\n\
                   1990;A;S;Early Bird;yes\n\
                   1991;B;S;Early Bird;yes\n\
                   2002;D;S;Late Starter;yes\n";
        let mut repo = InMemoryMovieRepository::new();
        load_movies_from_str(raw, &CsvFormat::default(), &mut repo);

        let report = producers_intervals(&repo);
        let names: Vec<&str> = report.min.iter().map(|i| i.producer.as_str()).collect();
        assert_eq!(names, vec!["Early Bird", "Late Starter"]);
        assert_eq!(report.min, report.max);
    }
}
