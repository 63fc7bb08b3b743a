use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use vicenza_api::models::{ThemeQuery, ThemeResponse};

use crate::configs::Clock;
use crate::errors::{ApiError, ThemeError};

#[derive(Clone)]
pub struct ThemeState {
    pub clock: Clock,
}

pub fn theme_router(theme_state: ThemeState) -> Router {
    Router::new()
        .route("/api/theme", get(get_theme))
        .with_state(theme_state)
}

#[utoipa::path(
    get,
    path = "/api/theme",
    tag = "theme",
    params(ThemeQuery),
    responses(
        (status = 200, description = "Time theme, weather classification and blended background", body = ThemeResponse),
        (status = 400, description = "Hour must be between 0 and 23")
    )
)]
pub async fn get_theme(
    State(state): State<ThemeState>,
    query: Result<Query<ThemeQuery>, QueryRejection>,
) -> Result<Json<ThemeResponse>, ApiError> {
    // Negative or non-numeric hours fail to parse into u8
    let Query(query) = query.map_err(|_| ThemeError::InvalidHour)?;

    let hour = match query.hour {
        Some(hour) if hour > 23 => return Err(ThemeError::InvalidHour.into()),
        Some(hour) => hour,
        None => state.clock.now().hour(),
    };

    Ok(Json(ThemeResponse::resolve(hour, query.condition.as_deref())))
}
