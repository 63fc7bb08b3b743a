pub mod api;
pub mod news;
pub mod sensor;
pub mod theme;
pub mod weather;

pub use api::ApiError;
pub use news::NewsError;
pub use sensor::SensorError;
pub use theme::ThemeError;
pub use weather::WeatherError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Extract status code, error message and the empty payload to keep the
        // client rendering
        let (status, error_message, fallback) = match &self {
            ApiError::SensorError(e) => (e.status_code(), e.to_string(), e.fallback()),
            ApiError::ThemeError(e) => (e.status_code(), e.to_string(), None),
            ApiError::WeatherError(e) => (e.status_code(), e.to_string(), None),
            ApiError::NewsError(e) => (e.status_code(), e.to_string(), e.fallback()),
        };

        // Create a consistent JSON error response
        let mut error_obj = json!({
            "code": status.as_u16(),
            "message": error_message
        });

        // Server side failures are logged with an id the client can report
        if status.is_server_error() {
            let error_id = Uuid::new_v4();
            tracing::error!(error_id = ?error_id, "{}", self);
            error_obj["error_id"] = json!(error_id.to_string());
        }

        let mut body = json!({
            "error": error_obj
        });

        if let Some((key, value)) = fallback {
            body[key] = value;
        }

        // Combine status code and JSON body into a response
        (status, Json(body)).into_response()
    }
}
