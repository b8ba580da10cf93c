use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Genre, Movie},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    genre: Option<String>,
}

/// Popular movies, or search results when `query` is given
pub async fn popular(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<PopularQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state
        .catalog
        .popular_or_search(params.query.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Movie fetch error");
            e.with_message("Failed to fetch movies")
        })?;

    Ok(Json(movies))
}

/// Genre list, verbatim from upstream
pub async fn genres(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Vec<Genre>>> {
    let genres = state.catalog.genres().await.map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Genres fetch error");
        e.with_message("Failed to fetch genres")
    })?;

    Ok(Json(genres))
}

/// Movies for a genre given by name
pub async fn by_genre(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<GenreQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let genre = params
        .genre
        .ok_or_else(|| AppError::InvalidInput("genre query parameter is required".to_string()))?;

    let movies = state.catalog.movies_by_genre(&genre).await.map_err(|e| {
        if !matches!(e, AppError::NotFound(_)) {
            tracing::error!(request_id = %request_id, genre = %genre, error = %e, "Genre movies fetch error");
        }
        e.with_message("Failed to fetch movies by genre")
    })?;

    Ok(Json(movies))
}
