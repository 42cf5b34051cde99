//! Common data types
//!
//! The movie record shape shared across the data module.

use crate::data::genres;
use serde::{Deserialize, Serialize};

// =============================================================================
// Genre
// =============================================================================

/// A movie genre as reported by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

impl Genre {
    /// Create a new genre
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// =============================================================================
// Movie - superset of the API's list and detail shapes
// =============================================================================

/// A movie record from the remote directory
///
/// The API serves two shapes: list items (search/discover/trending) carry
/// `genre_ids`, the detail endpoint carries `runtime` and `genres`. This
/// struct is the union of both; the side a response didn't send stays `None`.
/// Fields are passed through as received, without validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Unique identifier assigned by the directory
    pub id: u64,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Relative poster image path (may be null or empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,

    /// Plot summary
    #[serde(default)]
    pub overview: String,

    /// ISO release date, or empty when unknown
    #[serde(default)]
    pub release_date: String,

    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: f64,

    /// Runtime in minutes (detail shape only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,

    /// Full genre records (detail shape only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,

    /// Genre ids (list shape only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<u32>>,
}

impl Movie {
    /// Create a movie with minimal info
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            overview: String::new(),
            release_date: String::new(),
            vote_average: 0.0,
            runtime: None,
            genres: None,
            genre_ids: None,
        }
    }

    /// Set the poster path
    pub fn with_poster(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Set overview and release date
    pub fn with_summary(
        mut self,
        overview: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        self.overview = overview.into();
        self.release_date = release_date.into();
        self
    }

    /// Set the average rating
    pub fn with_rating(mut self, vote_average: f64) -> Self {
        self.vote_average = vote_average;
        self
    }

    /// Set detail-shape fields (runtime and full genres)
    pub fn with_detail(mut self, runtime: u32, genres: Vec<Genre>) -> Self {
        self.runtime = Some(runtime);
        self.genres = Some(genres);
        self
    }

    /// Set list-shape genre ids
    pub fn with_genre_ids(mut self, genre_ids: Vec<u32>) -> Self {
        self.genre_ids = Some(genre_ids);
        self
    }

    /// Whether this record came from the detail endpoint
    pub fn is_detail(&self) -> bool {
        self.runtime.is_some() || self.genres.is_some()
    }

    /// Resolve genre display names from whichever shape this record carries
    ///
    /// Detail records use their embedded `genres`; list records map
    /// `genre_ids` through the static table. Unknown ids are skipped.
    pub fn genre_names(&self) -> Vec<&str> {
        if let Some(ref full) = self.genres {
            return full.iter().map(|g| g.name.as_str()).collect();
        }
        if let Some(ref ids) = self.genre_ids {
            return ids.iter().filter_map(|id| genres::name_of(*id)).collect();
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_creation() {
        let movie = Movie::new(603, "The Matrix");
        assert_eq!(movie.id, 603);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.poster_path, None);
        assert!(!movie.is_detail());
    }

    #[test]
    fn test_movie_builder() {
        let movie = Movie::new(603, "The Matrix")
            .with_poster("/matrix.jpg")
            .with_summary("A hacker learns the truth.", "1999-03-31")
            .with_rating(8.2)
            .with_detail(136, vec![Genre::new(28, "Action")]);

        assert_eq!(movie.poster_path, Some("/matrix.jpg".to_string()));
        assert_eq!(movie.overview, "A hacker learns the truth.");
        assert_eq!(movie.release_date, "1999-03-31");
        assert_eq!(movie.vote_average, 8.2);
        assert_eq!(movie.runtime, Some(136));
        assert!(movie.is_detail());
    }

    #[test]
    fn test_genre_names_from_detail_shape() {
        let movie = Movie::new(1, "Test").with_detail(
            100,
            vec![Genre::new(28, "Action"), Genre::new(35, "Comedy")],
        );
        assert_eq!(movie.genre_names(), vec!["Action", "Comedy"]);
    }

    #[test]
    fn test_genre_names_from_list_shape() {
        let movie = Movie::new(1, "Test").with_genre_ids(vec![27, 18]);
        assert_eq!(movie.genre_names(), vec!["Horror", "Drama"]);
    }

    #[test]
    fn test_genre_names_skips_unknown_ids() {
        let movie = Movie::new(1, "Test").with_genre_ids(vec![28, 424242]);
        assert_eq!(movie.genre_names(), vec!["Action"]);
    }

    #[test]
    fn test_genre_names_without_genres() {
        let movie = Movie::new(1, "Test");
        assert!(movie.genre_names().is_empty());
    }

    #[test]
    fn test_deserialize_list_shape() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/matrix.jpg",
            "overview": "A hacker learns the truth.",
            "release_date": "1999-03-31",
            "vote_average": 8.2,
            "genre_ids": [28, 878]
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 603);
        assert_eq!(movie.genre_ids, Some(vec![28, 878]));
        assert_eq!(movie.runtime, None);
        assert_eq!(movie.genres, None);
        assert!(!movie.is_detail());
    }

    #[test]
    fn test_deserialize_detail_shape() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "runtime": 136,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.runtime, Some(136));
        assert_eq!(movie.genres.as_ref().unwrap().len(), 2);
        assert_eq!(movie.genre_ids, None);
        assert!(movie.is_detail());
    }

    #[test]
    fn test_deserialize_minimal() {
        // Only the id is required; everything else defaults
        let movie: Movie = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(movie.id, 42);
        assert_eq!(movie.title, "");
        assert_eq!(movie.release_date, "");
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.poster_path, None);
    }

    #[test]
    fn test_deserialize_null_poster() {
        let movie: Movie = serde_json::from_str(r#"{"id": 7, "poster_path": null}"#).unwrap();
        assert_eq!(movie.poster_path, None);
    }

    #[test]
    fn test_deserialize_extra_fields_ignored() {
        let json = r#"{
            "id": 7,
            "title": "Extra",
            "popularity": 99.5,
            "original_language": "en",
            "adult": false
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Extra");
    }

    #[test]
    fn test_serialize_skips_absent_shape_fields() {
        let movie = Movie::new(1, "Lean");
        let json = serde_json::to_string(&movie).unwrap();
        assert!(!json.contains("runtime"));
        assert!(!json.contains("genre_ids"));
        assert!(!json.contains("poster_path"));
    }

    #[test]
    fn test_roundtrip_preserves_shape() {
        let movie = Movie::new(603, "The Matrix")
            .with_rating(8.2)
            .with_genre_ids(vec![28, 878]);
        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movie);
    }
}
