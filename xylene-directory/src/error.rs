use thiserror::Error;

use xylene_core::DirectoryError;

#[derive(Debug, Error)]
pub enum DirectoryApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Folds client errors into the core taxonomy consumed by the cascade.
impl From<DirectoryApiError> for DirectoryError {
    fn from(err: DirectoryApiError) -> Self {
        match err {
            DirectoryApiError::Http(e) => DirectoryError::Transport(e.to_string()),
            DirectoryApiError::Api { status, message } => DirectoryError::Api { status, message },
            DirectoryApiError::Json(e) => DirectoryError::Decode(e.to_string()),
        }
    }
}
