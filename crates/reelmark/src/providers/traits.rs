//! Movie provider trait
//!
//! Defines the interface a remote movie directory must implement.

use crate::data::types::Movie;
use crate::error::Result;

use super::types::MoviePage;

/// A source of movie listings and detail records
///
/// Implementations wrap a specific directory service; callers and tests
/// program against this seam.
pub trait MovieProvider: Send + Sync {
    /// Display name for the provider (e.g., "The Movie Database")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "tmdb")
    fn id(&self) -> &'static str;

    /// Current popular movies (single page, list shape)
    fn popular(&self) -> Result<Vec<Movie>>;

    /// Movies trending this week, 1-based page
    fn trending(&self, page: u32) -> Result<MoviePage>;

    /// Search movies by text query, 1-based page
    fn search(&self, query: &str, page: u32) -> Result<MoviePage>;

    /// Browse movies within a genre, 1-based page
    fn discover_genre(&self, genre_id: u32, page: u32) -> Result<MoviePage>;

    /// Full detail record for a single movie (includes runtime and genres)
    fn movie_details(&self, id: u64) -> Result<Movie>;

    /// Movies recommended alongside the given one
    fn recommendations(&self, id: u64) -> Result<Vec<Movie>>;
}
