use axum::{extract::State, Extension, Json};

use crate::{error::AppResult, middleware::request_id::RequestId, models::Movie, routes::AppState};

/// Handler for the recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.catalog.recommendations().await.map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Recommendations fetch error");
        e.with_message("Failed to fetch recommendations")
    })?;

    Ok(Json(movies))
}
