use std::sync::Arc;

use axum::Router;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::repositories::SensorReadingRepository;
use crate::services::{NewsService, SensorService, create_provider};

pub async fn create_app(settings: &Arc<Settings>) -> anyhow::Result<Router> {
    let (sender, _receiver) = broadcast::channel(100);
    let storage = Arc::new(Storage::new(settings.database.clone(), SchemaManager::default()).await?);

    let sensor_reading_repository = Arc::new(SensorReadingRepository::new(storage.clone()));

    match settings.gateway.clone() {
        Some(gateway) => {
            let sensor_service = Arc::new(SensorService::new(
                sensor_reading_repository.clone(),
                sender.clone(),
            ));
            sensor_service.listen(gateway).await?;
        }
        None => tracing::info!("no gateway configured, sensor ingestion disabled"),
    }

    let weather_provider = create_provider(&settings.weather, settings.clock.clone());
    let news_service = Arc::new(NewsService::new(&settings.news));

    Ok(Router::new()
        .merge(sensor_router(SensorState {
            sensor_reading_repository: sensor_reading_repository.clone(),
        }))
        .merge(sse_router(SSEState {
            sender: sender.clone(),
        }))
        .merge(weather_router(WeatherState { weather_provider }))
        .merge(theme_router(ThemeState {
            clock: settings.clock.clone(),
        }))
        .merge(news_router(NewsState { news_service }))
        .merge(docs_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}
