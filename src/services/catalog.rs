use std::sync::Arc;

use rand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::{genre, Genre, Movie},
    services::{poster::PosterDecorator, providers::MetadataProvider},
};

/// Trending pages are drawn from `1..=TRENDING_PAGES`
pub const TRENDING_PAGES: u32 = 10;

/// Picks the trending page used for a recommendations request
pub type PagePicker = Arc<dyn Fn() -> u32 + Send + Sync>;

/// Uniform, unseeded pick in `1..=TRENDING_PAGES`
pub fn random_page() -> u32 {
    rand::rng().random_range(1..=TRENDING_PAGES)
}

/// The gateway's query surface over the metadata provider.
///
/// Every movie list leaving the catalog has its poster paths decorated.
/// Nothing is cached and nothing is retried.
#[derive(Clone)]
pub struct Catalog {
    provider: Arc<dyn MetadataProvider>,
    decorator: PosterDecorator,
    page_picker: PagePicker,
}

impl Catalog {
    pub fn new(provider: Arc<dyn MetadataProvider>, decorator: PosterDecorator) -> Self {
        Self {
            provider,
            decorator,
            page_picker: Arc::new(random_page),
        }
    }

    /// Replaces the trending page picker (tests pin it for reproducibility)
    pub fn with_page_picker(mut self, picker: PagePicker) -> Self {
        self.page_picker = picker;
        self
    }

    /// Searches when `query` is non-empty, otherwise lists popular movies.
    /// The query is forwarded as given.
    pub async fn popular_or_search(&self, query: Option<&str>) -> AppResult<Vec<Movie>> {
        let movies = match query.filter(|q| !q.is_empty()) {
            Some(q) => {
                tracing::debug!(query = %q, provider = self.provider.name(), "Searching movies");
                self.provider.search_movies(q).await?
            }
            None => self.provider.popular_movies().await?,
        };

        tracing::info!(
            query = query.unwrap_or_default(),
            results = movies.len(),
            "Movie listing fetched"
        );

        Ok(self.decorator.decorate_all(movies))
    }

    /// Trending movies from a randomly picked page
    pub async fn recommendations(&self) -> AppResult<Vec<Movie>> {
        let page = (self.page_picker)();
        let movies = self.provider.trending_movies(page).await?;

        tracing::info!(page, results = movies.len(), "Recommendations fetched");

        Ok(self.decorator.decorate_all(movies))
    }

    /// Full genre list, passed through undecorated
    pub async fn genres(&self) -> AppResult<Vec<Genre>> {
        self.provider.genres().await
    }

    /// Resolves `name` against the genre list, then discovers movies for that genre.
    ///
    /// Two upstream calls per request; the genre list is not cached.
    pub async fn movies_by_genre(&self, name: &str) -> AppResult<Vec<Movie>> {
        let genres = self.provider.genres().await?;

        let genre = genre::find_by_name(&genres, name).ok_or_else(|| {
            tracing::info!(genre = %name, "Genre not found");
            AppError::NotFound("Genre not found".to_string())
        })?;

        let movies = self.provider.discover_by_genre(genre.id).await?;

        tracing::info!(
            genre = %genre.name,
            genre_id = genre.id,
            results = movies.len(),
            "Genre movies fetched"
        );

        Ok(self.decorator.decorate_all(movies))
    }
}
