use std::sync::Arc;

use super::{
    favorites::{AddOutcome, FavoritesStore},
    service::MovieSource,
    Effects, Notice, Route,
};
use crate::models::Movie;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkthroughState {
    /// Nothing fetched yet
    Loading,
    /// Showing `recommendations[cursor]`
    Presenting { cursor: usize },
    /// Terminal; the user has been sent back to browse
    Exhausted,
}

/// One-at-a-time review of fetched recommendations with accept/skip actions.
///
/// The recommendation list is fetched independently of any browse selection.
pub struct Walkthrough {
    source: Arc<dyn MovieSource>,
    favorites: Arc<dyn FavoritesStore>,
    recommendations: Vec<Movie>,
    state: WalkthroughState,
}

impl Walkthrough {
    pub fn new(source: Arc<dyn MovieSource>, favorites: Arc<dyn FavoritesStore>) -> Self {
        Self {
            source,
            favorites,
            recommendations: Vec::new(),
            state: WalkthroughState::Loading,
        }
    }

    pub fn state(&self) -> WalkthroughState {
        self.state
    }

    pub fn recommendations(&self) -> &[Movie] {
        &self.recommendations
    }

    /// Movie under the cursor while presenting
    pub fn current(&self) -> Option<&Movie> {
        match self.state {
            WalkthroughState::Presenting { cursor } => self.recommendations.get(cursor),
            _ => None,
        }
    }

    /// Fetches recommendations. Failure or an empty list ends the walkthrough.
    pub async fn mount(&mut self) -> Effects {
        match self.source.get_recommendations().await {
            Ok(movies) if movies.is_empty() => {
                self.state = WalkthroughState::Exhausted;
                Effects::none()
                    .notice(Notice::Error("No recommendations available".to_string()))
                    .navigate(Route::Home)
            }
            Ok(movies) => {
                tracing::debug!(count = movies.len(), "Recommendations loaded");
                self.recommendations = movies;
                self.state = WalkthroughState::Presenting { cursor: 0 };
                Effects::none()
            }
            Err(e) => {
                tracing::error!(error = %e, "Recommendations fetch error");
                self.state = WalkthroughState::Exhausted;
                Effects::none()
                    .notice(Notice::Error("Failed to fetch recommendations".to_string()))
                    .navigate(Route::Home)
            }
        }
    }

    /// Stores the current movie unless it already is a favorite, then advances
    pub fn add_to_favorites(&mut self) -> Effects {
        let Some(movie) = self.current().cloned() else {
            return Effects::none();
        };

        let notice = match self.favorites.add(&movie) {
            Ok(AddOutcome::Added) => Notice::Success("Added to favorites!".to_string()),
            Ok(AddOutcome::AlreadyFavorite) => {
                Notice::Error("Movie already in favorites".to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, movie_id = movie.id, "Failed to add favorite");
                return Effects::none()
                    .notice(Notice::Error("Failed to add to favorites".to_string()));
            }
        };

        let mut effects = self.advance();
        effects.notices.insert(0, notice);
        effects
    }

    /// Skips the current movie
    pub fn next(&mut self) -> Effects {
        self.advance()
    }

    fn advance(&mut self) -> Effects {
        let WalkthroughState::Presenting { cursor } = self.state else {
            return Effects::none();
        };

        if cursor + 1 < self.recommendations.len() {
            self.state = WalkthroughState::Presenting { cursor: cursor + 1 };
            Effects::none()
        } else {
            self.state = WalkthroughState::Exhausted;
            Effects::none()
                .notice(Notice::Info("No more recommendations".to_string()))
                .navigate(Route::Home)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{
        favorites::{tests::movie, LocalFavorites},
        service::MockMovieSource,
        storage::MemoryStorage,
        ClientError,
    };

    fn source_with(movies: Vec<Movie>) -> MockMovieSource {
        let mut source = MockMovieSource::new();
        source
            .expect_get_recommendations()
            .times(1)
            .returning(move || Ok(movies.clone()));
        source
    }

    fn favorites() -> Arc<LocalFavorites> {
        Arc::new(LocalFavorites::new(Arc::new(MemoryStorage::new())))
    }

    async fn mounted(movies: Vec<Movie>, favorites: Arc<LocalFavorites>) -> Walkthrough {
        let mut walkthrough = Walkthrough::new(Arc::new(source_with(movies)), favorites);
        walkthrough.mount().await;
        walkthrough
    }

    #[tokio::test]
    async fn test_mount_presents_first() {
        let walkthrough = mounted(vec![movie(1), movie(2)], favorites()).await;

        assert_eq!(walkthrough.state(), WalkthroughState::Presenting { cursor: 0 });
        assert_eq!(walkthrough.current().map(|m| m.id), Some(1));
    }

    #[tokio::test]
    async fn test_mount_failure_routes_home() {
        let mut source = MockMovieSource::new();
        source.expect_get_recommendations().returning(|| {
            Err(ClientError::Status {
                status: 500,
                body: String::new(),
            })
        });

        let mut walkthrough = Walkthrough::new(Arc::new(source), favorites());
        let effects = walkthrough.mount().await;

        assert_eq!(effects.navigate, Some(Route::Home));
        assert_eq!(
            effects.notices,
            vec![Notice::Error("Failed to fetch recommendations".to_string())]
        );
        assert_eq!(walkthrough.current(), None);
    }

    #[tokio::test]
    async fn test_mount_empty_routes_home() {
        let mut walkthrough = Walkthrough::new(Arc::new(source_with(vec![])), favorites());
        let effects = walkthrough.mount().await;

        assert_eq!(effects.navigate, Some(Route::Home));
        assert_eq!(
            effects.notices,
            vec![Notice::Error("No recommendations available".to_string())]
        );
        assert_eq!(walkthrough.state(), WalkthroughState::Exhausted);
    }

    #[tokio::test]
    async fn test_next_exhausts_exactly_on_last_call() {
        let n = 4;
        let mut walkthrough = mounted((1..=n).map(movie).collect(), favorites()).await;

        let mut exhausted_on = Vec::new();
        for call in 0..n as usize {
            let effects = walkthrough.next();
            if effects.navigate == Some(Route::Home) {
                exhausted_on.push(call);
            }
        }

        assert_eq!(exhausted_on, vec![n as usize - 1]);
        assert_eq!(walkthrough.state(), WalkthroughState::Exhausted);

        // Nothing more happens once exhausted
        assert_eq!(walkthrough.next(), Effects::none());
    }

    #[tokio::test]
    async fn test_add_to_favorites_persists_and_advances() {
        let store = favorites();
        let mut walkthrough = mounted(vec![movie(1), movie(2)], store.clone()).await;

        let effects = walkthrough.add_to_favorites();

        assert_eq!(
            effects.notices,
            vec![Notice::Success("Added to favorites!".to_string())]
        );
        assert_eq!(walkthrough.current().map(|m| m.id), Some(2));
        assert!(store.contains(1));
    }

    #[tokio::test]
    async fn test_add_existing_favorite_signals_and_leaves_store() {
        let store = favorites();
        store.save(&[movie(1)]).unwrap();
        let mut walkthrough = mounted(vec![movie(1), movie(2)], store.clone()).await;

        let effects = walkthrough.add_to_favorites();

        assert_eq!(
            effects.notices,
            vec![Notice::Error("Movie already in favorites".to_string())]
        );
        assert_eq!(store.load().len(), 1);
        assert_eq!(walkthrough.current().map(|m| m.id), Some(2));
    }

    #[tokio::test]
    async fn test_add_on_last_movie_exhausts() {
        let store = favorites();
        let mut walkthrough = mounted(vec![movie(9)], store.clone()).await;

        let effects = walkthrough.add_to_favorites();

        assert_eq!(effects.navigate, Some(Route::Home));
        assert_eq!(
            effects.notices,
            vec![
                Notice::Success("Added to favorites!".to_string()),
                Notice::Info("No more recommendations".to_string()),
            ]
        );
        assert_eq!(walkthrough.state(), WalkthroughState::Exhausted);
        assert!(store.contains(9));
    }
}
