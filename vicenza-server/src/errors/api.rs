use super::{NewsError, SensorError, ThemeError, WeatherError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Sensor error: {0}")]
    SensorError(#[from] SensorError),

    #[error("Theme error: {0}")]
    ThemeError(#[from] ThemeError),

    #[error("Weather error: {0}")]
    WeatherError(#[from] WeatherError),

    #[error("News error: {0}")]
    NewsError(#[from] NewsError),
}
