//! Client-side flows: the gateway data service, the browse / recommendation /
//! favorites view state machines, and the locally persisted stores.
//!
//! Views never render anything. Each user action returns `Effects`: the
//! notices to show and where to navigate, if anywhere.

use std::sync::Arc;

use serde::Deserialize;

pub mod browse;
pub mod error;
pub mod favorites;
pub mod service;
pub mod storage;
pub mod theme;
pub mod walkthrough;

pub use browse::{BrowseView, LoadState};
pub use error::{ClientError, StoreError};
pub use favorites::{AddOutcome, FavoritesStore, FavoritesView, LocalFavorites};
pub use service::{MovieService, MovieSource};
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
pub use theme::{Theme, ThemeStore};
pub use walkthrough::{Walkthrough, WalkthroughState};

/// A transient user notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
    Info(String),
    /// Blocking acknowledgement the user has to dismiss
    Alert(String),
}

/// Client pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Recommendations,
    Favorites,
}

/// Side effects requested by a view action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    pub notices: Vec<Notice>,
    pub navigate: Option<Route>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn navigate(mut self, route: Route) -> Self {
        self.navigate = Some(route);
        self
    }
}

/// Client configuration, read from `REELPICK_`-prefixed environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway's movie routes
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// File backing local storage
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
}

fn default_gateway_url() -> String {
    "http://localhost:5000/api/movies".to_string()
}

fn default_storage_path() -> String {
    "reelpick-storage.json".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            storage_path: default_storage_path(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("REELPICK_")
            .from_env::<ClientConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load client config: {}", e))
    }
}

/// Shared collaborators the views are built from
#[derive(Clone)]
pub struct ClientContext {
    pub source: Arc<dyn MovieSource>,
    pub favorites: Arc<dyn FavoritesStore>,
    pub theme: ThemeStore,
}

impl ClientContext {
    pub fn new(source: Arc<dyn MovieSource>, storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            source,
            favorites: Arc::new(LocalFavorites::new(storage.clone())),
            theme: ThemeStore::new(storage),
        }
    }

    /// Gateway over HTTP, storage in the configured file
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            Arc::new(MovieService::new(config.gateway_url.clone())),
            Arc::new(FileStorage::new(&config.storage_path)),
        )
    }

    pub fn browse(&self) -> BrowseView {
        BrowseView::new(self.source.clone())
    }

    pub fn walkthrough(&self) -> Walkthrough {
        Walkthrough::new(self.source.clone(), self.favorites.clone())
    }

    pub fn favorites_view(&self) -> FavoritesView {
        FavoritesView::open(self.favorites.clone())
    }
}
