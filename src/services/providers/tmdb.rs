/// TMDB v3 provider
///
/// API Flow:
/// 1. Popular: /movie/popular
/// 2. Search: /search/movie?query=...
/// 3. Trending: /trending/movie/week?page=N
/// 4. Genres: /genre/movie/list
/// 5. Discover: /discover/movie?with_genres=ID
use crate::{
    error::{AppError, AppResult},
    models::{Genre, Movie, TmdbGenreList, TmdbMoviePage},
    services::providers::MetadataProvider,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;

const LANGUAGE: &str = "en-US";
const INCLUDE_ADULT: &str = "false";
const FIRST_PAGE: &str = "1";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issues a GET against the API and decodes the body into `T`.
    ///
    /// `api_key` and `language` are always sent; `params` adds the rest.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", LANGUAGE)])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(path = %path, status = %status, "TMDB returned error status");
            let message = format!("TMDB returned status {}", status);
            return Err(AppError::Upstream {
                detail: parse_detail(body, &message),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                "Failed to deserialize TMDB response"
            );
            AppError::upstream("Malformed TMDB response", e.to_string())
        })
    }

    async fn get_movies(&self, path: &str, params: &[(&str, String)]) -> AppResult<Vec<Movie>> {
        let page: TmdbMoviePage = self.get_json(path, params).await?;
        Ok(page.results)
    }
}

/// Upstream error bodies are usually JSON; keep them structured when they are.
/// An empty body is replaced by `fallback`.
fn parse_detail(body: String, fallback: &str) -> Value {
    if body.trim().is_empty() {
        return Value::String(fallback.to_string());
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn popular_movies(&self) -> AppResult<Vec<Movie>> {
        self.get_movies(
            "/movie/popular",
            &[
                ("include_adult", INCLUDE_ADULT.to_string()),
                ("page", FIRST_PAGE.to_string()),
            ],
        )
        .await
    }

    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>> {
        self.get_movies(
            "/search/movie",
            &[
                ("query", query.to_string()),
                ("include_adult", INCLUDE_ADULT.to_string()),
                ("page", FIRST_PAGE.to_string()),
            ],
        )
        .await
    }

    async fn trending_movies(&self, page: u32) -> AppResult<Vec<Movie>> {
        self.get_movies("/trending/movie/week", &[("page", page.to_string())])
            .await
    }

    async fn genres(&self) -> AppResult<Vec<Genre>> {
        let list: TmdbGenreList = self.get_json("/genre/movie/list", &[]).await?;
        Ok(list.genres)
    }

    async fn discover_by_genre(&self, genre_id: u32) -> AppResult<Vec<Movie>> {
        self.get_movies(
            "/discover/movie",
            &[
                ("with_genres", genre_id.to_string()),
                ("include_adult", INCLUDE_ADULT.to_string()),
                ("page", FIRST_PAGE.to_string()),
            ],
        )
        .await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
