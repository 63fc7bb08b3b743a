use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Hour must be between 0 and 23")]
    InvalidHour,
}

impl ThemeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ThemeError::InvalidHour => StatusCode::BAD_REQUEST,
        }
    }
}
