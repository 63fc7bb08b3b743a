use axum::http::StatusCode;
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("Failed to fetch sensor history")]
    HistoryUnavailable,

    #[error("Failed to fetch latest sensor reading")]
    LatestUnavailable,

    #[error("Invalid request parameters")]
    InvalidRequest,
}

impl SensorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SensorError::HistoryUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            SensorError::LatestUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            SensorError::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }

    /// Empty stand-in returned next to the error so the dashboard keeps
    /// rendering.
    pub fn fallback(&self) -> Option<(&'static str, Value)> {
        match self {
            SensorError::HistoryUnavailable => Some(("data", json!([]))),
            SensorError::LatestUnavailable => Some(("data", Value::Null)),
            SensorError::InvalidRequest => None,
        }
    }
}
