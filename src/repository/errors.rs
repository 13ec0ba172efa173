use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RepositoryError::ConnectionError("Request timed out".to_string())
        } else if err.is_connect() {
            RepositoryError::ConnectionError(format!("Connection failed: {err}"))
        } else if err.is_decode() {
            RepositoryError::DecodeError(err.to_string())
        } else if let Some(status) = err.status() {
            if status == reqwest::StatusCode::NOT_FOUND {
                RepositoryError::NotFound
            } else {
                RepositoryError::ApiError(format!("Server responded with {status}"))
            }
        } else {
            RepositoryError::Unexpected(err.to_string())
        }
    }
}
