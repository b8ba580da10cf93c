use std::sync::Arc;

use super::{error::StoreError, storage::LocalStorage, Notice};
use crate::models::Movie;

/// Local-storage key holding the serialized favorites array
pub const FAVORITES_KEY: &str = "favoriteMovies";

/// Result of adding a movie to favorites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyFavorite,
}

/// Persisted, ordered list of favorite movies.
///
/// Uniqueness by id is kept procedurally: `add` checks before appending.
pub trait FavoritesStore: Send + Sync {
    /// Stored favorites; missing or corrupt data reads as empty
    fn load(&self) -> Vec<Movie>;

    /// Overwrites the stored list
    fn save(&self, movies: &[Movie]) -> Result<(), StoreError>;

    /// Drops the movie with `id` and persists what is left
    fn remove(&self, id: u64) -> Result<Vec<Movie>, StoreError> {
        let remaining: Vec<Movie> = self.load().into_iter().filter(|m| m.id != id).collect();
        self.save(&remaining)?;
        Ok(remaining)
    }

    fn contains(&self, id: u64) -> bool {
        self.load().iter().any(|m| m.id == id)
    }

    /// Appends `movie` unless a favorite with the same id exists
    fn add(&self, movie: &Movie) -> Result<AddOutcome, StoreError> {
        let mut favorites = self.load();
        if favorites.iter().any(|m| m.id == movie.id) {
            return Ok(AddOutcome::AlreadyFavorite);
        }
        favorites.push(movie.clone());
        self.save(&favorites)?;
        Ok(AddOutcome::Added)
    }
}

/// `FavoritesStore` over a `LocalStorage` key
#[derive(Clone)]
pub struct LocalFavorites {
    storage: Arc<dyn LocalStorage>,
}

impl LocalFavorites {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }
}

impl FavoritesStore for LocalFavorites {
    fn load(&self) -> Vec<Movie> {
        let raw = match self.storage.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read favorites, treating as empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Malformed favorites in local storage, treating as empty");
            Vec::new()
        })
    }

    fn save(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let json = serde_json::to_string(movies)?;
        self.storage.set_item(FAVORITES_KEY, &json)
    }
}

/// The favorites page: stored list, per-item removal, empty state
pub struct FavoritesView {
    store: Arc<dyn FavoritesStore>,
    movies: Vec<Movie>,
}

impl FavoritesView {
    pub const EMPTY_MESSAGE: &'static str = "You haven't added any favorite movies yet.";

    /// Opens the view with the currently stored favorites
    pub fn open(store: Arc<dyn FavoritesStore>) -> Self {
        let movies = store.load();
        Self { store, movies }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Message to show instead of the grid, if any
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(Self::EMPTY_MESSAGE)
    }

    /// Removes a favorite and returns the acknowledgement the user must dismiss.
    /// The grid is refreshed from what the store kept.
    pub fn remove(&mut self, id: u64) -> Notice {
        match self.store.remove(id) {
            Ok(remaining) => {
                self.movies = remaining;
                Notice::Alert("Movie removed from favorites".to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, movie_id = id, "Failed to remove favorite");
                Notice::Alert("Failed to remove movie".to_string())
            }
        }
    }
}
