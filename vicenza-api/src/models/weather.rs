use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temp: f32,
    /// Short condition label, e.g. "Thunderstorms"
    pub condition: String,
    pub description: String,
    /// Wind speed in m/s
    pub wind_speed: f32,
    pub location: String,
    pub uv_index: u8,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindDetail {
    pub speed: f32,
    pub gusts: Vec<f32>,
    pub history: Vec<f32>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunTimes {
    /// Local `HH:MM`
    pub sunrise: String,
    /// Local `HH:MM`
    pub sunset: String,
    /// Local `HH:MM`
    pub current_time: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Weekday name
    pub day: String,
    /// Temperature in Celsius
    pub temp: f32,
    /// Icon key: storm, rain, snow, cloud, sun, sun-cloud or fog
    pub icon: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub wind: WindDetail,
    pub sun: SunTimes,
    pub forecast: Vec<ForecastDay>,
}
