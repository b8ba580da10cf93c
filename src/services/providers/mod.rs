/// Movie metadata provider abstraction
///
/// The gateway never talks to the metadata service directly. Everything goes
/// through this trait so the upstream can be swapped or mocked.
use crate::{
    error::AppResult,
    models::{Genre, Movie},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for upstream movie metadata sources
///
/// Implementations return undecorated records: poster paths stay relative.
/// Every failure (transport, status, schema) comes back as `AppError::Upstream`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// First page of the popular listing
    async fn popular_movies(&self) -> AppResult<Vec<Movie>>;

    /// First page of a free-text title search
    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>>;

    /// Given page of this week's trending movies
    async fn trending_movies(&self, page: u32) -> AppResult<Vec<Movie>>;

    /// Full genre list
    async fn genres(&self) -> AppResult<Vec<Genre>>;

    /// First page of movies tagged with the given genre id
    async fn discover_by_genre(&self, genre_id: u32) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
