use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use time::{Duration, OffsetDateTime};
use vicenza_api::models::*;

use crate::errors::{ApiError, SensorError};
use crate::repositories::SensorReadingRepository;

pub const MAX_HISTORY_HOURS: u32 = 8760;
pub const MAX_HISTORY_LIMIT: u32 = 1000;

#[derive(Clone)]
pub struct SensorState {
    pub sensor_reading_repository: Arc<SensorReadingRepository>,
}

pub fn sensor_router(sensor_state: SensorState) -> Router {
    Router::new()
        .route("/api/sensor-history", get(get_sensor_history))
        .route("/api/sensors/latest", get(get_latest_sensor_reading))
        .with_state(sensor_state)
}

#[utoipa::path(
    get,
    path = "/api/sensor-history",
    tag = "sensor",
    params(SensorHistoryQuery),
    responses(
        (status = 200, description = "Readings captured in the last `hours`, oldest first", body = SensorHistoryResponse),
        (status = 400, description = "Invalid request parameters"),
        (status = 500, description = "Failed to fetch sensor history")
    )
)]
pub async fn get_sensor_history(
    State(state): State<SensorState>,
    query: Result<Query<SensorHistoryQuery>, QueryRejection>,
) -> Result<Json<SensorHistoryResponse>, ApiError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Rejected sensor history query: {}", e);
        SensorError::InvalidRequest
    })?;

    if query.hours > MAX_HISTORY_HOURS || query.limit > MAX_HISTORY_LIMIT {
        return Err(SensorError::InvalidRequest.into());
    }

    let to = OffsetDateTime::now_utc();
    let from = to - Duration::hours(query.hours.into());

    let readings = state
        .sensor_reading_repository
        .find_by_time_range(from, to, query.limit.into())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching sensor history: {}", e);
            SensorError::HistoryUnavailable
        })?;

    let data: Vec<SensorReadingResponse> = readings.into_iter().map(Into::into).collect();

    Ok(Json(SensorHistoryResponse {
        count: data.len(),
        data,
        from,
        to,
    }))
}

#[utoipa::path(
    get,
    path = "/api/sensors/latest",
    tag = "sensor",
    responses(
        (status = 200, description = "Most recent reading, `null` when none was stored", body = Option<SensorReadingResponse>),
        (status = 500, description = "Failed to fetch latest sensor reading")
    )
)]
pub async fn get_latest_sensor_reading(
    State(state): State<SensorState>,
) -> Result<Json<Option<SensorReadingResponse>>, ApiError> {
    let reading = state
        .sensor_reading_repository
        .find_latest()
        .await
        .map_err(|e| {
            tracing::error!("Error fetching latest sensor reading: {}", e);
            SensorError::LatestUnavailable
        })?;

    Ok(Json(reading.map(Into::into)))
}
