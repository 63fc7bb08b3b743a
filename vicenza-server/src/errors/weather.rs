use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Failed to fetch weather data")]
    ProviderUnavailable,

    #[error("Unexpected weather provider response")]
    InvalidResponse,
}

impl WeatherError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::ProviderUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            WeatherError::InvalidResponse => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
