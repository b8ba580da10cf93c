use std::sync::Arc;

use super::{service::MovieSource, Effects, Notice, Route};
use crate::models::{Genre, Movie};

/// Number of movies that must be picked before confirming
pub const SELECTION_SIZE: usize = 5;

/// Fetch status of the movie grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// The browse page: movie grid, search, genre filter and five-movie selection.
///
/// Load state is independent of the two mode flags: a failed fetch never
/// changes `select_mode` or `genre_mode`.
pub struct BrowseView {
    source: Arc<dyn MovieSource>,
    load_state: LoadState,
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    select_mode: bool,
    genre_mode: bool,
    selected_genre: Option<String>,
    selection: Vec<Movie>,
}

impl BrowseView {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self {
            source,
            load_state: LoadState::Idle,
            movies: Vec::new(),
            genres: Vec::new(),
            select_mode: false,
            genre_mode: false,
            selected_genre: None,
            selection: Vec::new(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn select_mode(&self) -> bool {
        self.select_mode
    }

    pub fn genre_mode(&self) -> bool {
        self.genre_mode
    }

    pub fn selected_genre(&self) -> Option<&str> {
        self.selected_genre.as_deref()
    }

    pub fn selection(&self) -> &[Movie] {
        &self.selection
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.iter().any(|m| m.id == id)
    }

    /// Whether the confirm control is offered
    pub fn can_confirm(&self) -> bool {
        self.select_mode && self.selection.len() == SELECTION_SIZE
    }

    /// Initial load: popular movies and the genre list, fetched concurrently
    pub async fn mount(&mut self) -> Effects {
        self.load_state = LoadState::Loading;

        let source = self.source.clone();
        let (movies, genres) = tokio::join!(source.get_popular_movies(""), source.get_genres());

        let mut effects = self.apply_movies(movies);
        match genres {
            Ok(genres) => self.genres = genres,
            Err(e) => {
                tracing::error!(error = %e, "Genres fetch error");
                effects = effects.notice(Notice::Error("Failed to fetch genres".to_string()));
            }
        }
        effects
    }

    /// Text search; drops any genre filter
    pub async fn search(&mut self, query: &str) -> Effects {
        self.genre_mode = false;
        self.selected_genre = None;
        self.fetch_movies(query, None).await
    }

    /// Opens or closes the genre dropdown
    pub fn toggle_genre_mode(&mut self) {
        self.genre_mode = !self.genre_mode;
    }

    /// Picks a genre from the dropdown. Picking the active genre again clears the filter.
    pub async fn pick_genre(&mut self, name: &str) -> Effects {
        self.genre_mode = false;

        if self.selected_genre.as_deref() == Some(name) {
            self.selected_genre = None;
            self.fetch_movies("", None).await
        } else {
            self.selected_genre = Some(name.to_string());
            self.fetch_movies("", Some(name)).await
        }
    }

    /// Flips select mode. Prior picks are kept.
    pub fn toggle_select_mode(&mut self) {
        self.select_mode = !self.select_mode;
    }

    /// Toggles `movie` in the selection while select mode is on.
    /// Adding beyond `SELECTION_SIZE` is ignored.
    pub fn tap_movie(&mut self, movie: &Movie) {
        if !self.select_mode {
            return;
        }

        if let Some(pos) = self.selection.iter().position(|m| m.id == movie.id) {
            self.selection.remove(pos);
        } else if self.selection.len() < SELECTION_SIZE {
            self.selection.push(movie.clone());
        }
    }

    /// Moves on to recommendations once exactly five movies are picked.
    ///
    /// The selection is left in place; the recommendation flow does not read it.
    pub fn confirm(&self) -> Effects {
        if self.selection.len() != SELECTION_SIZE {
            return Effects::none().notice(Notice::Error(format!(
                "Please select exactly {} movies",
                SELECTION_SIZE
            )));
        }

        tracing::info!(
            selected = ?self.selection.iter().map(|m| m.id).collect::<Vec<_>>(),
            "Selection confirmed"
        );

        Effects::none()
            .notice(Notice::Success("Selection confirmed!".to_string()))
            .navigate(Route::Recommendations)
    }

    /// Back to the initial page: popular movies, no modes, nothing selected
    pub async fn reset_to_home(&mut self) -> Effects {
        self.select_mode = false;
        self.selection.clear();
        self.genre_mode = false;
        self.selected_genre = None;

        self.fetch_movies("", None).await.navigate(Route::Home)
    }

    async fn fetch_movies(&mut self, query: &str, genre: Option<&str>) -> Effects {
        self.load_state = LoadState::Loading;

        let result = match genre {
            Some(genre) => self.source.get_movies_by_genre(genre).await,
            None => self.source.get_popular_movies(query).await,
        };

        self.apply_movies(result)
    }

    fn apply_movies(&mut self, result: Result<Vec<Movie>, super::ClientError>) -> Effects {
        match result {
            Ok(movies) => {
                self.movies = movies;
                self.load_state = LoadState::Loaded;
                Effects::none()
            }
            Err(e) => {
                tracing::error!(error = %e, "Movie fetch error");
                let message = e.to_string();
                self.load_state = LoadState::Error(message.clone());
                Effects::none().notice(Notice::Error(message))
            }
        }
    }
}
