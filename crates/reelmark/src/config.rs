//! Configuration constants for reelmark

/// Application metadata
pub mod app {
    /// Application name (used for the data directory, etc.)
    pub const NAME: &str = "reelmark";
}

/// TMDB-related configuration
pub mod tmdb {
    /// Default TMDB v3 API server
    pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

    /// Environment variable holding the API key
    pub const API_KEY_ENV: &str = "TMDB_API_KEY";

    /// Environment variable overriding the API base URL
    pub const BASE_URL_ENV: &str = "TMDB_BASE_URL";
}

/// Network tuning
pub mod network {
    /// User-Agent header sent with every request
    pub const USER_AGENT: &str = concat!("reelmark/", env!("CARGO_PKG_VERSION"));

    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Full-request read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}
