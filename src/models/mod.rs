use serde::Deserialize;

pub mod genre;
pub mod movie;

pub use genre::Genre;
pub use movie::Movie;

// ============================================================================
// TMDB API Types
// ============================================================================

/// Paged movie listing returned by popular, search, trending and discover
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMoviePage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Response of /genre/movie/list
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenreList {
    pub genres: Vec<Genre>,
}
