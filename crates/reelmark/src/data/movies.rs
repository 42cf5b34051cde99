//! Movie listing cache
//!
//! Holds the most recently fetched listing and performs on-demand
//! detail/recommendation fetches through a `MovieProvider`.

use crate::data::types::Movie;
use crate::error::Result;
use crate::providers::MovieProvider;

/// Transient holder of the current movie listing
///
/// Not persisted; lives for the process. Detail and recommendation lookups
/// go to the provider on every call — nothing fetched here is cached, and
/// concurrent calls for the same id are independent requests.
pub struct MovieCache {
    movies: Vec<Movie>,
    provider: Box<dyn MovieProvider>,
}

impl MovieCache {
    /// Create an empty cache over a provider
    pub fn new(provider: Box<dyn MovieProvider>) -> Self {
        Self {
            movies: Vec::new(),
            provider,
        }
    }

    /// The most recently stored listing
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Replace the stored listing wholesale
    ///
    /// No merging, no deduplication, no validation — the new list is the
    /// listing, exactly as handed in.
    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
    }

    /// The provider backing detail/recommendation lookups
    pub fn provider(&self) -> &dyn MovieProvider {
        self.provider.as_ref()
    }

    // =========================================================================
    // Detail fetch
    // =========================================================================

    /// Fetch the full detail record for a movie, with typed failure
    pub fn try_movie_details(&self, id: u64) -> Result<Movie> {
        self.provider.movie_details(id)
    }

    /// Fetch the full detail record for a movie
    ///
    /// Any transport, status, or decode failure becomes `None`; callers show
    /// a generic not-found state. Use [`try_movie_details`] to learn why.
    ///
    /// [`try_movie_details`]: MovieCache::try_movie_details
    pub fn movie_details(&self, id: u64) -> Option<Movie> {
        self.try_movie_details(id).ok()
    }

    // =========================================================================
    // Recommendations
    // =========================================================================

    /// Fetch recommendations for a movie, with typed failure
    pub fn try_recommendations(&self, id: u64) -> Result<Vec<Movie>> {
        self.provider.recommendations(id)
    }

    /// Fetch recommendations for a movie
    ///
    /// Any failure becomes an empty list; callers show an empty state.
    pub fn recommendations(&self, id: u64) -> Vec<Movie> {
        self.try_recommendations(id).unwrap_or_default()
    }
}
