//! Shared provider types

use crate::data::types::Movie;

/// One page of results from a listing endpoint
#[derive(Debug, Clone)]
pub struct MoviePage {
    /// Movies on this page
    pub movies: Vec<Movie>,
    /// 1-based page number this result represents
    pub page: u32,
    /// Total number of pages (if the provider reports it)
    pub total_pages: Option<u32>,
}

impl MoviePage {
    /// Create an empty first page
    pub fn empty() -> Self {
        Self {
            movies: Vec::new(),
            page: 1,
            total_pages: Some(0),
        }
    }

    /// Whether another page is available after this one
    pub fn has_more(&self) -> bool {
        match self.total_pages {
            Some(total) => self.page < total,
            None => !self.movies.is_empty(),
        }
    }
}
