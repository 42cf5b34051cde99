//! Favorites management
//!
//! Persisted, insertion-ordered collection of saved movies, unique by id.

use crate::data::storage;
use crate::data::types::Movie;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Favorites data file name
const FAVORITES_FILE: &str = "favorites.json";

/// Favorites file format version for migrations
const FAVORITES_VERSION: u32 = 1;

/// Favorites file structure
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesFile {
    version: u32,
    favorites: Vec<Movie>,
}

impl Default for FavoritesFile {
    fn default() -> Self {
        Self {
            version: FAVORITES_VERSION,
            favorites: Vec::new(),
        }
    }
}

/// Manages the user's saved movies
///
/// Insertion order is preserved; at most one entry per movie id. Every
/// mutation rewrites the backing file before returning, so a later mutation
/// can never overlap an earlier write.
pub struct FavoritesManager {
    favorites: Vec<Movie>,
    path: PathBuf,
}

impl FavoritesManager {
    /// Open favorites at the default storage location
    pub fn open() -> Result<Self> {
        let path = storage::data_path(FAVORITES_FILE)?;
        Ok(Self::load_from(&path))
    }

    /// Load favorites from a specific path
    ///
    /// Absent, empty, or malformed data yields an empty manager; this never
    /// fails. Duplicate ids in a hand-edited file are dropped, first
    /// occurrence wins.
    pub fn load_from(path: &Path) -> Self {
        let favorites = match storage::load_from::<FavoritesFile>(path) {
            Ok(Some(file)) => dedup_by_id(file.favorites),
            Ok(None) | Err(_) => Vec::new(),
        };

        Self {
            favorites,
            path: path.to_path_buf(),
        }
    }

    /// Add a movie to favorites
    ///
    /// If an entry with the same id already exists this is a silent no-op;
    /// the first-inserted entry is kept. Idempotent.
    pub fn add(&mut self, movie: Movie) -> Result<()> {
        if self.is_favorite(movie.id) {
            return Ok(());
        }
        self.favorites.push(movie);
        self.commit()
    }

    /// Remove a favorite by movie id
    ///
    /// Removing an id that isn't present is a no-op, not an error.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        let before = self.favorites.len();
        self.favorites.retain(|m| m.id != id);
        if self.favorites.len() == before {
            return Ok(());
        }
        self.commit()
    }

    /// Add the movie if absent, remove it if present
    ///
    /// Returns `true` if the movie is a favorite after the call.
    pub fn toggle(&mut self, movie: Movie) -> Result<bool> {
        if self.is_favorite(movie.id) {
            self.remove(movie.id)?;
            Ok(false)
        } else {
            self.add(movie)?;
            Ok(true)
        }
    }

    /// Check whether a movie id is favorited
    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.iter().any(|m| m.id == id)
    }

    /// Get a favorite by movie id
    pub fn get(&self, id: u64) -> Option<&Movie> {
        self.favorites.iter().find(|m| m.id == id)
    }

    /// All favorites in insertion order
    pub fn all(&self) -> &[Movie] {
        &self.favorites
    }

    /// Number of favorites
    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Write the full favorites sequence to the backing file
    fn commit(&self) -> Result<()> {
        let file = FavoritesFile {
            version: FAVORITES_VERSION,
            favorites: self.favorites.clone(),
        };
        storage::save_to(&self.path, &file)
    }
}

/// Drop entries whose id was already seen, preserving order
fn dedup_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = std::collections::HashSet::new();
    movies.into_iter().filter(|m| seen.insert(m.id)).collect()
}
