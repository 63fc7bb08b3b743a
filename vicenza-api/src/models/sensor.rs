use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Id;

pub const DEFAULT_HISTORY_HOURS: u32 = 24;
pub const DEFAULT_HISTORY_LIMIT: u32 = 100;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReadingResponse {
    /// Reading identifier
    pub id: Id,
    /// Room temperature in Celsius
    pub temp_room: f32,
    /// Room relative humidity %
    pub hum_room: f32,
    /// Outdoor temperature in Celsius
    pub temp_out: f32,
    /// Illuminance in lux
    pub lux: f32,
    /// Raw light dependent resistor value
    pub ldr_raw: i32,
    /// Capture time, Unix seconds
    pub timestamp: i64,
    /// Storage time
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorHistoryQuery {
    /// Window length in hours, ending now
    #[serde(default = "default_hours")]
    pub hours: u32,
    /// Maximum number of readings
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for SensorHistoryQuery {
    fn default() -> Self {
        Self {
            hours: DEFAULT_HISTORY_HOURS,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

fn default_hours() -> u32 {
    DEFAULT_HISTORY_HOURS
}

fn default_limit() -> u32 {
    DEFAULT_HISTORY_LIMIT
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorHistoryResponse {
    /// Readings in ascending capture order
    pub data: Vec<SensorReadingResponse>,
    pub count: usize,
    /// Resolved window start
    #[serde(with = "time::serde::rfc3339")]
    pub from: OffsetDateTime,
    /// Resolved window end
    #[serde(with = "time::serde::rfc3339")]
    pub to: OffsetDateTime,
}
