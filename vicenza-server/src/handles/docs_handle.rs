use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;
use vicenza_api::models::*;
use vicenza_api::theme::*;

use super::*;

#[derive(OpenApi)]
#[openapi(
    info(title = "Vicenza weather dashboard"),
    paths(
        get_sensor_history,
        get_latest_sensor_reading,
        sse_handler,
        get_weather,
        get_theme,
        get_news,
    ),
    components(schemas(
        SensorReadingResponse,
        SensorHistoryResponse,
        WeatherSnapshot,
        CurrentConditions,
        WindDetail,
        SunTimes,
        ForecastDay,
        ThemeResponse,
        ThemeDescriptor,
        CelestialPlacement,
        Gradient,
        TimePeriod,
        WeatherType,
        WeatherEffects,
        MistTint,
        NewsResponse,
        NewsItem,
    )),
    tags(
        (name = "sensor", description = "Stored sensor readings"),
        (name = "weather", description = "Outdoor conditions"),
        (name = "theme", description = "Background descriptors"),
        (name = "news", description = "Local headlines"),
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api/openapi.json", get(get_openapi))
}

pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
