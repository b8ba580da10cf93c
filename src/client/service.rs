use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ClientError, ClientResult};
use crate::models::{Genre, Movie};

/// What the client flows need from the gateway.
///
/// List calls never fail on shape: a success body that is not an array
/// yields an empty list. Transport and status failures are returned to the
/// caller, which decides how to tell the user.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieSource: Send + Sync {
    async fn get_popular_movies(&self, query: &str) -> ClientResult<Vec<Movie>>;

    async fn get_genres(&self) -> ClientResult<Vec<Genre>>;

    async fn get_movies_by_genre(&self, genre: &str) -> ClientResult<Vec<Movie>>;

    async fn get_recommendations(&self) -> ClientResult<Vec<Movie>>;
}

/// HTTP implementation of `MovieSource` against the gateway's /api/movies routes
#[derive(Clone)]
pub struct MovieService {
    http_client: HttpClient,
    base_url: String,
}

impl MovieService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> ClientResult<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http_client.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let value = serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::warn!(path = %path, error = %e, "Gateway body is not JSON");
            Value::Null
        });

        Ok(coerce_list(value))
    }
}

/// Non-array values become an empty list; array items that do not match `T` are skipped.
pub fn coerce_list<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[async_trait::async_trait]
impl MovieSource for MovieService {
    async fn get_popular_movies(&self, query: &str) -> ClientResult<Vec<Movie>> {
        self.get_list("/popular", &[("query", query)])
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error fetching movies"))
    }

    async fn get_genres(&self) -> ClientResult<Vec<Genre>> {
        self.get_list("/genres", &[])
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error fetching genres"))
    }

    async fn get_movies_by_genre(&self, genre: &str) -> ClientResult<Vec<Movie>> {
        self.get_list("/genre", &[("genre", genre)])
            .await
            .inspect_err(|e| tracing::error!(error = %e, genre = %genre, "Error fetching movies by genre"))
    }

    async fn get_recommendations(&self) -> ClientResult<Vec<Movie>> {
        self.get_list("/recommendations", &[])
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error fetching recommendations"))
    }
}
