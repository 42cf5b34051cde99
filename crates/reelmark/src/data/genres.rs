//! Static TMDB genre table
//!
//! List endpoints only carry genre ids; this table resolves display names
//! without a network round-trip.

use crate::data::types::Genre;

/// TMDB genre ids and display names
pub const GENRES: &[(u32, &str)] = &[
    (28, "Action"),
    (35, "Comedy"),
    (27, "Horror"),
    (10749, "Romance"),
    (18, "Drama"),
    (12, "Adventure"),
    (16, "Animation"),
    (80, "Crime"),
    (99, "Documentary"),
    (14, "Fantasy"),
    (36, "History"),
    (10402, "Music"),
    (9648, "Mystery"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Look up the display name for a genre id
pub fn name_of(id: u32) -> Option<&'static str> {
    GENRES.iter().find(|(gid, _)| *gid == id).map(|(_, name)| *name)
}

/// All known genres as owned records (table order)
pub fn all() -> Vec<Genre> {
    GENRES
        .iter()
        .map(|(id, name)| Genre::new(*id, *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_of_known_id() {
        assert_eq!(name_of(28), Some("Action"));
        assert_eq!(name_of(878), Some("Science Fiction"));
    }

    #[test]
    fn test_name_of_unknown_id() {
        assert_eq!(name_of(0), None);
        assert_eq!(name_of(424242), None);
    }

    #[test]
    fn test_all_matches_table() {
        let genres = all();
        assert_eq!(genres.len(), GENRES.len());
        assert_eq!(genres[0], Genre::new(28, "Action"));
    }

    #[test]
    fn test_table_ids_unique() {
        let mut ids: Vec<u32> = GENRES.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), GENRES.len());
    }
}
