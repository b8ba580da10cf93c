mod common;

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use common::{gateway, serve, UpstreamStub};
use reelpick::client::{
    ClientContext, ClientError, FileStorage, LoadState, MemoryStorage, MovieService,
    MovieSource, Notice, Route, WalkthroughState,
};

/// A gateway that answers with shapes a well-behaved one never would
async fn odd_gateway() -> String {
    let app = Router::new()
        .route("/popular", get(|| async { Json(json!({ "results": [] })) }))
        .route("/genre", get(|| async { Json(Value::Null) }))
        .route("/recommendations", get(|| async { "not json at all" }))
        .route(
            "/genres",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to fetch genres", "error": "boom" })),
                )
            }),
        );
    serve(app).await
}

#[tokio::test]
async fn test_non_array_bodies_become_empty_lists() {
    let service = MovieService::new(odd_gateway().await);

    assert!(service.get_popular_movies("").await.unwrap().is_empty());
    assert!(service.get_movies_by_genre("Comedy").await.unwrap().is_empty());
    assert!(service.get_recommendations().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_is_propagated() {
    let service = MovieService::new(odd_gateway().await);

    match service.get_genres().await {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("Failed to fetch genres"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_gateway_is_http_error() {
    let service = MovieService::new("http://127.0.0.1:9/api/movies");

    let result = service.get_recommendations().await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}

/// Gateway served over a real port, in front of the stub metadata service
async fn live_gateway(stub: &UpstreamStub) -> String {
    let upstream_url = stub.spawn().await;
    let gateway_url = serve(gateway(&upstream_url)).await;
    format!("{}/api/movies", gateway_url)
}

#[tokio::test]
async fn test_browse_through_gateway() {
    let stub = UpstreamStub::healthy();
    let context = ClientContext::new(
        Arc::new(MovieService::new(live_gateway(&stub).await)),
        Arc::new(MemoryStorage::new()),
    );

    let mut browse = context.browse();
    browse.mount().await;
    assert_eq!(browse.load_state(), &LoadState::Loaded);
    assert_eq!(browse.movies().len(), 2);
    assert_eq!(browse.genres().len(), 3);

    browse.pick_genre("Comedy").await;
    assert_eq!(browse.movies()[0].id, 101);
    assert_eq!(
        browse.movies()[0].poster_path.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/superbad.jpg")
    );

    let effects = browse.pick_genre("Noexist").await;
    assert_eq!(
        browse.load_state(),
        &LoadState::Error("Request failed with status code 404".to_string())
    );
    assert_eq!(effects.notices.len(), 1);
}

#[tokio::test]
async fn test_walkthrough_to_favorites_round_trip() {
    let stub = UpstreamStub::healthy();
    let dir = tempfile::tempdir().unwrap();
    let context = ClientContext::new(
        Arc::new(MovieService::new(live_gateway(&stub).await)),
        Arc::new(FileStorage::new(dir.path().join("storage.json"))),
    );

    let mut walkthrough = context.walkthrough();
    walkthrough.mount().await;
    assert_eq!(walkthrough.state(), WalkthroughState::Presenting { cursor: 0 });

    walkthrough.add_to_favorites();
    walkthrough.next();
    let effects = walkthrough.add_to_favorites();

    assert_eq!(effects.navigate, Some(Route::Home));
    assert_eq!(walkthrough.state(), WalkthroughState::Exhausted);

    let mut favorites = context.favorites_view();
    let ids: Vec<u64> = favorites.movies().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![11, 13]);

    let notice = favorites.remove(11);
    assert_eq!(notice, Notice::Alert("Movie removed from favorites".to_string()));
    assert!(!context.favorites.contains(11));
    assert!(context.favorites.contains(13));
}

#[tokio::test]
async fn test_walkthrough_redirects_when_gateway_fails() {
    let stub = UpstreamStub::rejecting();
    let context = ClientContext::new(
        Arc::new(MovieService::new(live_gateway(&stub).await)),
        Arc::new(MemoryStorage::new()),
    );

    let mut walkthrough = context.walkthrough();
    let effects = walkthrough.mount().await;

    assert_eq!(effects.navigate, Some(Route::Home));
    assert_eq!(
        effects.notices,
        vec![Notice::Error("Failed to fetch recommendations".to_string())]
    );
}
