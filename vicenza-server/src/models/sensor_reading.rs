use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vicenza_api::models::SensorReadingResponse;

use super::Table;

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct SensorReading {
    pub id: i64,
    /// Room temperature in Celsius
    pub temp_room: f32,
    /// Room relative humidity %
    pub hum_room: f32,
    /// Outdoor temperature in Celsius
    pub temp_out: f32,
    /// Illuminance in lux
    pub lux: f32,
    /// Raw light sensor value
    pub ldr_raw: i32,
    /// Capture time as reported by the device, Unix seconds
    pub timestamp: i64,
    /// The time the record was stored
    pub created_at: OffsetDateTime,
}

impl From<SensorReading> for SensorReadingResponse {
    fn from(reading: SensorReading) -> Self {
        SensorReadingResponse {
            id: reading.id,
            temp_room: reading.temp_room,
            hum_room: reading.hum_room,
            temp_out: reading.temp_out,
            lux: reading.lux,
            ldr_raw: reading.ldr_raw,
            timestamp: reading.timestamp,
            created_at: reading.created_at,
        }
    }
}

#[derive(Clone)]
pub struct SensorReadingTable;

impl Table for SensorReadingTable {
    fn name(&self) -> &'static str {
        "sensor_readings"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sensor_readings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                temp_room REAL NOT NULL,
                hum_room REAL NOT NULL,
                temp_out REAL NOT NULL,
                lux REAL NOT NULL,
                ldr_raw INTEGER NOT NULL,
                timestamp INTEGER NOT NULL,
                created_at TIMESTAMP NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_sensor_readings_timestamp ON sensor_readings (timestamp DESC);
            CREATE INDEX IF NOT EXISTS idx_sensor_readings_created_at ON sensor_readings (created_at DESC);
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sensor_readings;")
    }
}
