//! TMDB API provider
//!
//! Implementation of `MovieProvider` for The Movie Database v3 REST API
//! (<https://developer.themoviedb.org/>).

use crate::config::tmdb::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::data::types::Movie;
use crate::error::{AppError, Result};
use crate::network::HttpClient;

use super::traits::MovieProvider;
use super::types::MoviePage;

use serde::Deserialize;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

/// Envelope wrapping every listing endpoint's response
///
/// `total_pages` is reported by search/discover/trending but not by
/// popular/recommendations; `Movie` itself is already the wire shape.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    results: Vec<Movie>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    total_pages: Option<u32>,
}

impl ListEnvelope {
    fn into_page(self, requested_page: u32) -> MoviePage {
        MoviePage {
            page: self.page.unwrap_or(requested_page),
            total_pages: self.total_pages,
            movies: self.results,
        }
    }
}

// =============================================================================
// TmdbProvider
// =============================================================================

/// TMDB movie directory provider
///
/// Base URL and API key are read once at construction; a bad key is not
/// validated here and simply fails on the first request.
pub struct TmdbProvider {
    client: HttpClient,
    base_url: String,
    api_key: String,
}

impl TmdbProvider {
    /// Create a provider for the default TMDB server
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a provider with a custom base URL (for testing or proxies)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Create a provider from `TMDB_API_KEY` / `TMDB_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AppError::Config(format!("{API_KEY_ENV} is not set")))?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url, api_key)
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a listing endpoint with the api_key and extra query parameters
    fn list(&self, path: &str, extra: &[(&str, &str)], requested_page: u32) -> Result<MoviePage> {
        let mut query: Vec<(&str, &str)> = vec![("api_key", &self.api_key)];
        query.extend_from_slice(extra);

        let envelope: ListEnvelope = self.client.get_json_with(&self.url(path), &query)?;
        Ok(envelope.into_page(requested_page))
    }
}

impl MovieProvider for TmdbProvider {
    fn name(&self) -> &'static str {
        "The Movie Database"
    }

    fn id(&self) -> &'static str {
        "tmdb"
    }

    fn popular(&self) -> Result<Vec<Movie>> {
        let envelope: ListEnvelope = self
            .client
            .get_json_with(&self.url("/movie/popular"), &[("api_key", &self.api_key)])?;
        Ok(envelope.results)
    }

    fn trending(&self, page: u32) -> Result<MoviePage> {
        let page_str = page.to_string();
        self.list("/trending/movie/week", &[("page", &page_str)], page)
    }

    fn search(&self, query: &str, page: u32) -> Result<MoviePage> {
        let page_str = page.to_string();
        self.list(
            "/search/movie",
            &[("query", query), ("page", &page_str)],
            page,
        )
    }

    fn discover_genre(&self, genre_id: u32, page: u32) -> Result<MoviePage> {
        let genre_str = genre_id.to_string();
        let page_str = page.to_string();
        self.list(
            "/discover/movie",
            &[("with_genres", &genre_str), ("page", &page_str)],
            page,
        )
    }

    fn movie_details(&self, id: u64) -> Result<Movie> {
        self.client.get_json_with(
            &self.url(&format!("/movie/{id}")),
            &[("api_key", &self.api_key)],
        )
    }

    fn recommendations(&self, id: u64) -> Result<Vec<Movie>> {
        let envelope: ListEnvelope = self.client.get_json_with(
            &self.url(&format!("/movie/{id}/recommendations")),
            &[("api_key", &self.api_key)],
        )?;
        Ok(envelope.results)
    }
}

// =============================================================================
// Tests
// =============================================================================
