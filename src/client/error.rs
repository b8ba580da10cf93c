/// Failures of the client data service when talking to the gateway
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },
}

/// Failures of the local key/value store
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed local state: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
