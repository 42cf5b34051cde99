//! Application context
//!
//! Composition root: both stores constructed once at process start and
//! passed by reference to consumers, instead of ambient global state.

use crate::data::{FavoritesManager, MovieCache};
use crate::error::Result;
use crate::providers::TmdbProvider;

/// The two client-side stores, wired and ready
///
/// `favorites` and `movies` are independent; neither reads the other.
pub struct AppContext {
    pub favorites: FavoritesManager,
    pub movies: MovieCache,
}

impl AppContext {
    /// Build the default context: TMDB from the environment, favorites at
    /// the default storage location
    pub fn init() -> Result<Self> {
        let provider = TmdbProvider::from_env()?;
        Ok(Self {
            favorites: FavoritesManager::open()?,
            movies: MovieCache::new(Box::new(provider)),
        })
    }

    /// Assemble a context from pre-built stores (tests, embedders)
    pub fn with_parts(favorites: FavoritesManager, movies: MovieCache) -> Self {
        Self { favorites, movies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::Movie;
    use crate::error::AppError;
    use crate::providers::{MoviePage, MovieProvider};
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    struct StubProvider;

    impl MovieProvider for StubProvider {
        fn name(&self) -> &'static str {
            "Stub"
        }

        fn id(&self) -> &'static str {
            "stub"
        }

        fn popular(&self) -> crate::error::Result<Vec<Movie>> {
            Ok(vec![Movie::new(10, "Popular")])
        }

        fn trending(&self, _page: u32) -> crate::error::Result<MoviePage> {
            Ok(MoviePage::empty())
        }

        fn search(&self, _query: &str, _page: u32) -> crate::error::Result<MoviePage> {
            Ok(MoviePage::empty())
        }

        fn discover_genre(&self, _genre_id: u32, _page: u32) -> crate::error::Result<MoviePage> {
            Ok(MoviePage::empty())
        }

        fn movie_details(&self, _id: u64) -> crate::error::Result<Movie> {
            Err(AppError::Config("stub".to_string()))
        }

        fn recommendations(&self, _id: u64) -> crate::error::Result<Vec<Movie>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_with_parts_composes_independent_stores() {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = temp_dir().join(format!("reelmark_ctx_test_{}.json", id));

        let favorites = FavoritesManager::load_from(&path);
        let movies = MovieCache::new(Box::new(StubProvider));
        let mut ctx = AppContext::with_parts(favorites, movies);

        // Favorite a movie from a fetched listing; the cache is untouched
        let popular = ctx.movies.provider().popular().unwrap();
        ctx.movies.set_movies(popular);
        let first = ctx.movies.movies()[0].clone();
        ctx.favorites.add(first).unwrap();

        assert!(ctx.favorites.is_favorite(10));
        assert_eq!(ctx.movies.movies().len(), 1);

        let _ = fs::remove_file(&path);
    }
}
