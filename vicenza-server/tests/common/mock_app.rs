#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use time::OffsetDateTime;
use tokio::net::TcpListener;
use tokio::sync::broadcast::{self, Sender};

use vicenza_server::configs::{Clock, Database, News, SchemaManager, Storage};
use vicenza_server::handles::*;
use vicenza_server::models::SensorReading;
use vicenza_server::repositories::SensorReadingRepository;
use vicenza_server::services::{MockWeatherProvider, NewsService, OpenWeatherProvider, WeatherProvider};

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub sensor_reading_repository: Arc<SensorReadingRepository>,
    pub sender: Sender<ServiceEvent>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );
        let (sender, _receiver) = broadcast::channel(16);

        Self {
            sensor_reading_repository: Arc::new(SensorReadingRepository::new(storage.clone())),
            storage,
            sender,
            router: Router::new(),
        }
    }

    pub fn with_sensor_handle(mut self) -> Self {
        self.router = self.router.merge(sensor_router(SensorState {
            sensor_reading_repository: self.sensor_reading_repository.clone(),
        }));
        self
    }

    pub fn with_sse_handle(mut self) -> Self {
        self.router = self.router.merge(sse_router(SSEState {
            sender: self.sender.clone(),
        }));
        self
    }

    pub fn with_theme_handle(mut self, clock: Clock) -> Self {
        self.router = self.router.merge(theme_router(ThemeState { clock }));
        self
    }

    pub fn with_mock_weather_handle(self) -> Self {
        let provider = MockWeatherProvider::new("New York".to_string(), Clock { utc_offset_hours: 7 });
        self.with_weather_provider(Arc::new(provider))
    }

    pub fn with_openweather_handle(self, base_url: String) -> Self {
        let provider = OpenWeatherProvider::new("test-key".to_string(), "Thanh Hoa".to_string(), base_url);
        self.with_weather_provider(Arc::new(provider))
    }

    fn with_weather_provider(mut self, weather_provider: Arc<dyn WeatherProvider>) -> Self {
        self.router = self.router.merge(weather_router(WeatherState { weather_provider }));
        self
    }

    pub fn with_news_handle(mut self, feed_url: String) -> Self {
        let news_service = Arc::new(NewsService::new(&News { feed_url, limit: 10 }));
        self.router = self.router.merge(news_router(NewsState { news_service }));
        self
    }

    pub fn with_docs_handle(mut self) -> Self {
        self.router = self.router.merge(docs_router());
        self
    }

    /// Stores a reading captured `age_secs` seconds ago.
    pub async fn create_test_reading(&self, age_secs: i64, temp_room: f32) -> SensorReading {
        let reading = SensorReading {
            id: 0,
            temp_room,
            hum_room: 60.0,
            temp_out: 30.0,
            lux: 250.0,
            ldr_raw: 512,
            timestamp: OffsetDateTime::now_utc().unix_timestamp() - age_secs,
            created_at: OffsetDateTime::now_utc(),
        };

        let mut tx = self.sensor_reading_repository.get_pool().begin().await.unwrap();
        let id = self.sensor_reading_repository.create(&reading, &mut tx).await.unwrap();
        tx.commit().await.unwrap();

        self.sensor_reading_repository.find_by_id(id).await.unwrap().unwrap()
    }
}

/// Serves `router` on an ephemeral local port and returns its base url.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{address}")
}
