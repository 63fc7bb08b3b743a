use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use vicenza_api::models::WeatherSnapshot;

use crate::errors::ApiError;
use crate::services::WeatherProvider;

#[derive(Clone)]
pub struct WeatherState {
    pub weather_provider: Arc<dyn WeatherProvider>,
}

pub fn weather_router(weather_state: WeatherState) -> Router {
    Router::new()
        .route("/api/weather", get(get_weather))
        .with_state(weather_state)
}

#[utoipa::path(
    get,
    path = "/api/weather",
    tag = "weather",
    responses(
        (status = 200, description = "Current conditions, wind, sun times and a 7 day forecast", body = WeatherSnapshot),
        (status = 500, description = "Failed to fetch weather data")
    )
)]
pub async fn get_weather(State(state): State<WeatherState>) -> Result<Json<WeatherSnapshot>, ApiError> {
    Ok(Json(state.weather_provider.snapshot().await?))
}
