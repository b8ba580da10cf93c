pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::Config;
use routes::{create_router, AppState};
use services::{providers::TmdbProvider, Catalog, PosterDecorator};

/// Builds the gateway's shared state from configuration
pub fn build_state(config: &Config) -> AppState {
    let provider = TmdbProvider::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone());
    let decorator = PosterDecorator::new(config.image_base_url.clone(), config.poster_size.clone());

    AppState::new(Catalog::new(Arc::new(provider), decorator))
}

/// Binds the configured address and serves the gateway until the process exits
pub async fn run(config: Config) -> anyhow::Result<()> {
    let app = create_router(build_state(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Gateway listening");

    axum::serve(listener, app).await?;
    Ok(())
}
