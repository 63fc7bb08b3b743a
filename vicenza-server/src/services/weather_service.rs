use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tokio::sync::Mutex;
use vicenza_api::models::{CurrentConditions, ForecastDay, SunTimes, WeatherSnapshot, WindDetail};
use vicenza_api::theme::WeatherType;

use crate::configs::{Clock, Weather};
use crate::errors::WeatherError;

const CLOCK_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");
const FORECAST_DAYS: usize = 7;
const WIND_HISTORY_LEN: usize = 11;
const WIND_GUST_LEN: usize = 7;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn snapshot(&self) -> Result<WeatherSnapshot, WeatherError>;
}

pub fn create_provider(weather: &Weather, clock: Clock) -> Arc<dyn WeatherProvider> {
    match weather {
        Weather::Mock { location } => Arc::new(MockWeatherProvider::new(location.clone(), clock)),
        Weather::OpenWeather { api_key, city, base_url } => Arc::new(OpenWeatherProvider::new(
            api_key.clone(),
            city.clone(),
            base_url.clone(),
        )),
    }
}

fn clock_time(time: OffsetDateTime) -> Result<String, WeatherError> {
    time.format(CLOCK_FORMAT).map_err(|e| {
        tracing::error!("Failed to format time: {}", e);
        WeatherError::InvalidResponse
    })
}

/// Fixed demo data, only the current time moves.
pub struct MockWeatherProvider {
    location: String,
    clock: Clock,
}

impl MockWeatherProvider {
    pub fn new(location: String, clock: Clock) -> Self {
        Self { location, clock }
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn snapshot(&self) -> Result<WeatherSnapshot, WeatherError> {
        let forecast = [
            ("Monday", 26.0, "cloud"),
            ("Tuesday", 28.0, "cloud"),
            ("Wednesday", 24.0, "storm"),
            ("Thursday", 26.0, "cloud"),
            ("Friday", 23.0, "cloud"),
            ("Saturday", 26.0, "cloud"),
            ("Sunday", 27.0, "sun-cloud"),
        ]
        .into_iter()
        .map(|(day, temp, icon)| ForecastDay {
            day: day.to_string(),
            temp,
            icon: icon.to_string(),
        })
        .collect();

        Ok(WeatherSnapshot {
            current: CurrentConditions {
                temp: 22.0,
                condition: "Thunderstorms".to_string(),
                description: "Heavy rain, strong winds, and occasional lightning expected. \
                    Sudden downpours may lead to localized flooding in some areas."
                    .to_string(),
                wind_speed: 7.9,
                location: self.location.clone(),
                uv_index: 5,
            },
            wind: WindDetail {
                speed: 7.9,
                gusts: vec![8.0, 9.0, 7.0, 10.0, 8.0, 9.0, 11.0],
                history: vec![6.0, 7.0, 8.0, 7.0, 9.0, 8.0, 7.0, 8.0, 9.0, 7.0, 8.0],
            },
            sun: SunTimes {
                sunrise: "06:30".to_string(),
                sunset: "19:45".to_string(),
                current_time: clock_time(self.clock.now())?,
            },
            forecast,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ConditionPayload {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainPayload {
    temp: f32,
}

#[derive(Debug, Deserialize)]
struct WindPayload {
    speed: f32,
    gust: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct SysPayload {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    weather: Vec<ConditionPayload>,
    main: MainPayload,
    wind: WindPayload,
    name: String,
    sys: SysPayload,
    /// Shift from UTC in seconds
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct ForecastEntryPayload {
    dt: i64,
    main: MainPayload,
    weather: Vec<ConditionPayload>,
    wind: WindPayload,
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    list: Vec<ForecastEntryPayload>,
}

/// Live conditions from the OpenWeatherMap current weather and 5 day
/// forecast endpoints.
///
/// The 3-hourly forecast spans five days from now, so `forecast` holds at most
/// six local days here, unlike the seven of the mock snapshot.
pub struct OpenWeatherProvider {
    client: reqwest::Client,
    api_key: String,
    city: String,
    base_url: String,
    wind_history: Mutex<VecDeque<f32>>,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, city: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            city,
            base_url,
            wind_history: Mutex::new(VecDeque::with_capacity(WIND_HISTORY_LEN)),
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(&[("q", self.city.as_str()), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!("Error fetching weather data from {}: {}", endpoint, e);
                WeatherError::ProviderUnavailable
            })?;

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Error decoding weather data from {}: {}", endpoint, e);
            WeatherError::InvalidResponse
        })
    }

    /// Records the latest observed speed and returns the rolling series,
    /// oldest first.
    async fn record_wind(&self, speed: f32) -> Vec<f32> {
        let mut history = self.wind_history.lock().await;
        if history.len() == WIND_HISTORY_LEN {
            history.pop_front();
        }
        history.push_back(speed);

        history.iter().copied().collect()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn snapshot(&self) -> Result<WeatherSnapshot, WeatherError> {
        let current: CurrentPayload = self.fetch("weather").await?;
        let forecast: ForecastPayload = self.fetch("forecast").await?;
        let history = self.record_wind(current.wind.speed).await;

        build_snapshot(current, forecast, history, OffsetDateTime::now_utc())
    }
}

fn build_snapshot(
    current: CurrentPayload,
    forecast: ForecastPayload,
    history: Vec<f32>,
    now: OffsetDateTime,
) -> Result<WeatherSnapshot, WeatherError> {
    let offset = UtcOffset::from_whole_seconds(current.timezone).map_err(|_| WeatherError::InvalidResponse)?;
    let local = |unix: i64| {
        OffsetDateTime::from_unix_timestamp(unix)
            .map(|time| time.to_offset(offset))
            .map_err(|_| WeatherError::InvalidResponse)
    };

    let condition = current.weather.first().ok_or(WeatherError::InvalidResponse)?;

    let gusts = forecast
        .list
        .iter()
        .take(WIND_GUST_LEN)
        .map(|entry| entry.wind.gust.unwrap_or(entry.wind.speed))
        .collect();

    // One entry per local day, keeping the warmest slot of each
    let mut days: Vec<(time::Date, f32, WeatherType)> = Vec::with_capacity(FORECAST_DAYS);
    for entry in &forecast.list {
        let date = local(entry.dt)?.date();
        let weather = WeatherType::classify(entry.weather.first().map(|c| c.main.as_str()));

        if let Some((day, temp, kind)) = days.last_mut() {
            if *day == date {
                if entry.main.temp > *temp {
                    *temp = entry.main.temp;
                    *kind = weather;
                }
                continue;
            }
        }

        if days.len() == FORECAST_DAYS {
            break;
        }
        days.push((date, entry.main.temp, weather));
    }

    Ok(WeatherSnapshot {
        current: CurrentConditions {
            temp: current.main.temp,
            condition: condition.main.clone(),
            description: condition.description.clone(),
            wind_speed: current.wind.speed,
            location: current.name,
            // Not part of the current weather endpoint
            uv_index: 0,
        },
        wind: WindDetail {
            speed: current.wind.speed,
            gusts,
            history,
        },
        sun: SunTimes {
            sunrise: clock_time(local(current.sys.sunrise)?)?,
            sunset: clock_time(local(current.sys.sunset)?)?,
            current_time: clock_time(now.to_offset(offset))?,
        },
        forecast: days
            .into_iter()
            .map(|(date, temp, weather)| ForecastDay {
                day: date.weekday().to_string(),
                temp: temp.round(),
                icon: weather.icon_key().to_string(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_snapshot_shape() {
        let provider = MockWeatherProvider::new("New York".to_string(), Clock { utc_offset_hours: 7 });
        let snapshot = provider.snapshot().await.unwrap();

        assert_eq!(snapshot.current.condition, "Thunderstorms");
        assert_eq!(snapshot.current.location, "New York");
        assert_eq!(snapshot.forecast.len(), 7);
        assert_eq!(snapshot.forecast[2].icon, "storm");
        assert_eq!(snapshot.wind.gusts.len(), 7);
        assert_eq!(snapshot.wind.history.len(), 11);
        assert_eq!(snapshot.sun.current_time.len(), 5);
        assert_eq!(
            WeatherType::classify(Some(&snapshot.current.condition)),
            WeatherType::Thunderstorm
        );
    }

    fn current_fixture() -> CurrentPayload {
        serde_json::from_str(
            r#"{
                "weather": [{"main": "Rain", "description": "moderate rain"}],
                "main": {"temp": 29.4},
                "wind": {"speed": 4.1},
                "name": "Thanh Hoa",
                "sys": {"sunrise": 1700002800, "sunset": 1700043300},
                "timezone": 25200
            }"#,
        )
        .unwrap()
    }

    fn forecast_fixture() -> ForecastPayload {
        // 2023-11-15 00:00 +07 is 1699981200
        let day = 86_400;
        let base = 1_699_981_200i64;
        let entries: Vec<String> = (0..8)
            .flat_map(|d| {
                [(3 * 3600, 24.0, "Clouds", 5.2), (12 * 3600, 31.0 + d as f32, "Thunderstorm", 6.0)]
                    .into_iter()
                    .map(move |(shift, temp, main, gust)| {
                        format!(
                            r#"{{"dt": {}, "main": {{"temp": {}}}, "weather": [{{"main": "{}"}}], "wind": {{"speed": 3.0, "gust": {}}}}}"#,
                            base + d * day + shift,
                            temp,
                            main,
                            gust
                        )
                    })
            })
            .collect();

        serde_json::from_str(&format!(r#"{{"list": [{}]}}"#, entries.join(","))).unwrap()
    }

    #[test]
    fn test_build_snapshot_from_openweather() {
        let now = OffsetDateTime::from_unix_timestamp(1_700_020_800).unwrap();
        let snapshot = build_snapshot(current_fixture(), forecast_fixture(), vec![4.1], now).unwrap();

        assert_eq!(snapshot.current.condition, "Rain");
        assert_eq!(snapshot.current.location, "Thanh Hoa");
        assert_eq!(snapshot.sun.sunrise, "06:00");
        assert_eq!(snapshot.sun.sunset, "17:15");
        assert_eq!(snapshot.sun.current_time, "11:00");
        assert_eq!(snapshot.wind.history, vec![4.1]);
        assert_eq!(snapshot.wind.gusts.len(), 7);

        assert_eq!(snapshot.forecast.len(), 7);
        assert_eq!(snapshot.forecast[0].day, "Wednesday");
        assert_eq!(snapshot.forecast[0].temp, 31.0);
        assert_eq!(snapshot.forecast[0].icon, "storm");
        assert_eq!(snapshot.forecast[6].temp, 37.0);
    }

    #[test]
    fn test_build_snapshot_rejects_empty_conditions() {
        let mut current = current_fixture();
        current.weather.clear();

        let result = build_snapshot(current, ForecastPayload { list: vec![] }, vec![], OffsetDateTime::now_utc());
        assert!(matches!(result, Err(WeatherError::InvalidResponse)));
    }

    #[tokio::test]
    async fn test_wind_history_is_bounded() {
        let provider = OpenWeatherProvider::new(String::new(), String::new(), String::new());

        let mut series = vec![];
        for speed in 0..15 {
            series = provider.record_wind(speed as f32).await;
        }

        assert_eq!(series.len(), WIND_HISTORY_LEN);
        assert_eq!(series.first(), Some(&4.0));
        assert_eq!(series.last(), Some(&14.0));
    }
}
