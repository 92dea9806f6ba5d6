//! Errors returned by the exercise tracker API client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 409 from the server: the username already exists
    #[error("username already taken")]
    Conflict,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict)
    }
}
