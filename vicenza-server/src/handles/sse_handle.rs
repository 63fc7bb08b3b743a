use std::convert::Infallible;

use axum::Router;
use axum::extract::State;
use axum::response::Sse;
use axum::response::sse::{Event, KeepAlive};
use axum::routing::get;
use serde::Serialize;
use tokio::sync::broadcast::Sender;
use tokio_stream::StreamExt;
use tokio_stream::{Stream, wrappers};
use vicenza_api::models::SensorReadingResponse;

#[derive(Clone, Debug, Serialize)]
pub enum ServiceEvent {
    SensorReadingCreate(SensorReadingResponse),
}

impl ServiceEvent {
    fn into_event(self) -> Option<Event> {
        match self {
            ServiceEvent::SensorReadingCreate(payload) => {
                Event::default().event("sensor_reading").json_data(payload)
            }
        }
        .map_err(|e| tracing::error!("Failed to encode service event: {}", e))
        .ok()
    }
}

#[derive(Clone)]
pub struct SSEState {
    pub sender: Sender<ServiceEvent>,
}

pub fn sse_router(sse_state: SSEState) -> Router {
    Router::new()
        .route("/api/sensors/events", get(sse_handler))
        .with_state(sse_state)
}

#[utoipa::path(
    get,
    path = "/api/sensors/events",
    tag = "sensor",
    responses(
        (status = 200, description = "Stream of `sensor_reading` events carrying new readings", body = String, content_type = "text/event-stream")
    )
)]
pub async fn sse_handler(
    State(state): State<SSEState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.sender.subscribe();

    // Lagged receivers skip the missed events
    let stream = wrappers::BroadcastStream::new(receiver)
        .filter_map(|result| result.ok().and_then(ServiceEvent::into_event).map(Ok));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
