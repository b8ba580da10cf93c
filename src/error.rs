use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Gateway-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Network failure, non-2xx status or malformed payload from the metadata service.
    /// `detail` carries the upstream body when there is one, otherwise the error message.
    #[error("{message}")]
    Upstream { message: String, detail: Value },

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds an upstream error whose detail is a plain message
    pub fn upstream(message: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::Upstream {
            message: message.into(),
            detail: Value::String(detail.into()),
        }
    }

    /// Replaces the human message of an upstream failure, keeping the detail.
    /// Other variants pass through untouched.
    pub fn with_message(self, message: &str) -> Self {
        match self {
            AppError::Upstream { detail, .. } => AppError::Upstream {
                message: message.to_string(),
                detail,
            },
            other => other,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::upstream("Metadata service request failed", err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            AppError::Upstream { message, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": message, "error": detail }),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Internal server error", "error": msg }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
