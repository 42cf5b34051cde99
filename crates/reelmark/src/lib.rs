//! Reelmark — movie catalog browsing core
//!
//! Favorites persistence, listing cache, and a TMDB directory client.
//!
//! ## Quick start
//!
//! ```no_run
//! use reelmark::context::AppContext;
//!
//! let mut ctx = AppContext::init().unwrap();
//! if let Some(movie) = ctx.movies.movie_details(603) {
//!     ctx.favorites.add(movie).unwrap();
//! }
//! ```

pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod network;
pub mod providers;

pub use context::AppContext;
pub use data::{FavoritesManager, Genre, Movie, MovieCache};
pub use error::{AppError, Result};
pub use providers::{MoviePage, MovieProvider, TmdbProvider};
