use axum::http::StatusCode;
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("Failed to fetch news")]
    FeedUnavailable,

    #[error("Failed to parse news feed")]
    InvalidFeed,
}

impl NewsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            NewsError::FeedUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            NewsError::InvalidFeed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn fallback(&self) -> Option<(&'static str, Value)> {
        Some(("news", json!([])))
    }
}
