#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};

use reelpick::{
    routes::{create_router, AppState},
    services::{providers::TmdbProvider, Catalog, PosterDecorator},
};

/// One request received by the stub metadata service
#[derive(Debug, Clone)]
pub struct UpstreamCall {
    pub path: String,
    pub params: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct UpstreamStub {
    calls: Arc<Mutex<Vec<UpstreamCall>>>,
    fail: bool,
}

impl UpstreamStub {
    /// A stub that answers every known path successfully
    pub fn healthy() -> Self {
        Self::default()
    }

    /// A stub that rejects every request like an invalid API key would
    pub fn rejecting() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<UpstreamCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<UpstreamCall> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }

    /// Serves the stub on an ephemeral loopback port and returns its base URL
    pub async fn spawn(&self) -> String {
        let app = Router::new().fallback(upstream).with_state(self.clone());
        serve(app).await
    }
}

pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn movie_page(results: Value) -> Value {
    json!({ "page": 1, "results": results, "total_pages": 1, "total_results": 2 })
}

async fn upstream(
    State(stub): State<UpstreamStub>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let path = uri.path().to_string();
    stub.calls.lock().unwrap().push(UpstreamCall {
        path: path.clone(),
        params,
    });

    if stub.fail {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "status_code": 7,
                "status_message": "Invalid API key: You must be granted a valid key.",
                "success": false
            })),
        )
            .into_response();
    }

    let body = match path.as_str() {
        "/genre/movie/list" => json!({
            "genres": [
                { "id": 28, "name": "Action" },
                { "id": 35, "name": "Comedy" },
                { "id": 878, "name": "Science Fiction" }
            ]
        }),
        "/discover/movie" => movie_page(json!([
            { "id": 101, "title": "Superbad", "poster_path": "/superbad.jpg", "genre_ids": [35] },
            { "id": 102, "title": "Obscure Comedy", "poster_path": null, "genre_ids": [35] }
        ])),
        "/movie/popular" => movie_page(json!([
            { "id": 1, "title": "Popular One", "poster_path": "/one.jpg", "release_date": "2024-03-01" },
            { "id": 2, "title": "Popular Two", "poster_path": "/two.jpg", "release_date": "" }
        ])),
        "/search/movie" => movie_page(json!([
            { "id": 603, "title": "The Matrix", "poster_path": "/matrix.jpg" }
        ])),
        "/trending/movie/week" => movie_page(json!([
            { "id": 11, "title": "Trending One", "poster_path": "/t1.jpg" },
            { "id": 12, "title": "Trending Two", "poster_path": null },
            { "id": 13, "title": "Trending Three", "poster_path": "/t3.jpg" }
        ])),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    Json(body).into_response()
}

/// Gateway router talking to the stub at `upstream_url`, trending page pinned to 3
pub fn gateway(upstream_url: &str) -> Router {
    let provider = TmdbProvider::new("test_key".to_string(), upstream_url.to_string());
    let catalog = Catalog::new(Arc::new(provider), PosterDecorator::default())
        .with_page_picker(Arc::new(|| 3));
    create_router(AppState::new(catalog))
}
