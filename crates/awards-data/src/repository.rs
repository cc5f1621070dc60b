//! Storage for loaded movies.
//!
//! The analysis only needs "every winner, oldest first"; [`MovieRepository`]
//! is the seam, [`InMemoryMovieRepository`] the implementation used by the
//! binary and the tests.

use awards_core::models::Movie;

/// Where loaded movies are kept between ingestion and analysis.
pub trait MovieRepository {
    /// Append `movies` to the store, keeping their order.
    fn save_all(&mut self, movies: Vec<Movie>);

    /// Every stored movie in insertion order.
    fn find_all(&self) -> Vec<Movie>;

    /// Winning movies sorted by ascending year.
    ///
    /// Movies from the same year stay in insertion order.
    fn find_winners_ordered_by_year_asc(&self) -> Vec<Movie>;

    fn delete_all(&mut self);

    fn count(&self) -> usize;
}

/// [`MovieRepository`] backed by a plain vector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieRepository {
    movies: Vec<Movie>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovieRepository for InMemoryMovieRepository {
    fn save_all(&mut self, movies: Vec<Movie>) {
        self.movies.extend(movies);
    }

    fn find_all(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    fn find_winners_ordered_by_year_asc(&self) -> Vec<Movie> {
        let mut winners: Vec<Movie> = self.movies.iter().filter(|m| m.winner).cloned().collect();
        // Stable sort keeps same-year winners in insertion order.
        winners.sort_by_key(|m| m.year);
        winners
    }

    fn delete_all(&mut self) {
        self.movies.clear();
    }

    fn count(&self) -> usize {
        self.movies.len()
    }
}
