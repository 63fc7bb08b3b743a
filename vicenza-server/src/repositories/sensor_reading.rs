use std::sync::Arc;

use sqlx::{Error, Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::models::SensorReading;

pub struct SensorReadingRepository {
    storage: Arc<Storage>,
}

impl SensorReadingRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &SqlitePool {
        self.storage.get_pool()
    }
}

impl SensorReadingRepository {
    // Append a reading, `id` and `created_at` of the item are ignored
    pub async fn create(
        &self,
        item: &SensorReading,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO sensor_readings (temp_room, hum_room, temp_out, lux, ldr_raw, timestamp, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.temp_room)
        .bind(item.hum_room)
        .bind(item.temp_out)
        .bind(item.lux)
        .bind(item.ldr_raw)
        .bind(item.timestamp)
        .bind(OffsetDateTime::now_utc())
        .execute(&mut **transaction)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<SensorReading>, Error> {
        let reading: Option<SensorReading> =
            sqlx::query_as("SELECT * FROM sensor_readings WHERE id = $1")
                .bind(id)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(reading)
    }

    // Most recent capture, newest insert wins on equal timestamps
    pub async fn find_latest(&self) -> Result<Option<SensorReading>, Error> {
        let reading: Option<SensorReading> = sqlx::query_as(
            r#"
            SELECT * FROM sensor_readings
            ORDER BY timestamp DESC, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(reading)
    }

    // Readings captured within [start_time, end_time], oldest first
    pub async fn find_by_time_range(
        &self,
        start_time: OffsetDateTime,
        end_time: OffsetDateTime,
        limit: i64,
    ) -> Result<Vec<SensorReading>, Error> {
        let readings: Vec<SensorReading> = sqlx::query_as(
            r#"
            SELECT * FROM sensor_readings
            WHERE timestamp >= $1 AND timestamp <= $2
            ORDER BY timestamp ASC, id ASC
            LIMIT $3
            "#,
        )
        .bind(start_time.unix_timestamp())
        .bind(end_time.unix_timestamp())
        .bind(limit)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(readings)
    }
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use crate::configs::{Database, SchemaManager};

    use super::*;

    async fn setup_test_db() -> Arc<Storage> {
        Arc::new(
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
        )
    }

    fn reading_at(time: OffsetDateTime, lux: f32) -> SensorReading {
        SensorReading {
            id: 0,
            temp_room: 26.0,
            hum_room: 60.0,
            temp_out: 30.0,
            lux,
            ldr_raw: 700,
            timestamp: time.unix_timestamp(),
            created_at: time,
        }
    }

    async fn insert_all(repo: &SensorReadingRepository, readings: &[SensorReading]) {
        let mut tx = repo.get_pool().begin().await.unwrap();
        for reading in readings {
            repo.create(reading, &mut tx).await.unwrap();
        }
        tx.commit().await.unwrap();
    }

    #[tokio::test]
    async fn test_create_and_find_reading() {
        let storage = setup_test_db().await;
        let repo = SensorReadingRepository::new(storage.clone());

        let now = OffsetDateTime::now_utc();
        let mut tx = storage.get_pool().begin().await.unwrap();
        let id = repo.create(&reading_at(now, 350.0), &mut tx).await.unwrap();
        tx.commit().await.unwrap();

        let found = repo.find_by_id(id).await.unwrap();
        assert!(found.is_some());
        let found = found.unwrap();
        assert_eq!(found.lux, 350.0);
        assert_eq!(found.ldr_raw, 700);
        assert_eq!(found.timestamp, now.unix_timestamp());
    }

    #[tokio::test]
    async fn test_find_latest() {
        let storage = setup_test_db().await;
        let repo = SensorReadingRepository::new(storage.clone());

        assert!(repo.find_latest().await.unwrap().is_none());

        let base_time = OffsetDateTime::now_utc();
        insert_all(
            &repo,
            &[
                reading_at(base_time + Duration::minutes(10), 300.0),
                reading_at(base_time, 100.0),
                reading_at(base_time + Duration::minutes(5), 200.0),
            ],
        )
        .await;

        let latest = repo.find_latest().await.unwrap().unwrap();
        assert_eq!(latest.lux, 300.0);
    }

    #[tokio::test]
    async fn test_latest_breaks_ties_by_insert_order() {
        let storage = setup_test_db().await;
        let repo = SensorReadingRepository::new(storage.clone());

        let now = OffsetDateTime::now_utc();
        insert_all(&repo, &[reading_at(now, 1.0), reading_at(now, 2.0)]).await;

        assert_eq!(repo.find_latest().await.unwrap().unwrap().lux, 2.0);
    }

    #[tokio::test]
    async fn test_find_by_time_range() {
        let storage = setup_test_db().await;
        let repo = SensorReadingRepository::new(storage.clone());

        let base_time = OffsetDateTime::now_utc();
        insert_all(
            &repo,
            &[
                reading_at(base_time + Duration::minutes(10), 200.0),
                reading_at(base_time, 100.0),
                reading_at(base_time + Duration::minutes(5), 150.0),
            ],
        )
        .await;

        let in_range = repo
            .find_by_time_range(base_time + Duration::minutes(3), base_time + Duration::minutes(7), 100)
            .await
            .unwrap();
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].lux, 150.0);

        let all = repo
            .find_by_time_range(base_time, base_time + Duration::minutes(10), 100)
            .await
            .unwrap();
        let lux: Vec<f32> = all.iter().map(|r| r.lux).collect();
        assert_eq!(lux, vec![100.0, 150.0, 200.0]);
    }

    #[tokio::test]
    async fn test_time_range_limit_keeps_oldest() {
        let storage = setup_test_db().await;
        let repo = SensorReadingRepository::new(storage.clone());

        let base_time = OffsetDateTime::now_utc();
        let readings: Vec<SensorReading> = (0..5)
            .map(|i| reading_at(base_time + Duration::minutes(i), i as f32))
            .collect();
        insert_all(&repo, &readings).await;

        let capped = repo
            .find_by_time_range(base_time, base_time + Duration::hours(1), 2)
            .await
            .unwrap();
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].lux, 0.0);
        assert_eq!(capped[1].lux, 1.0);

        let none = repo
            .find_by_time_range(base_time, base_time + Duration::hours(1), 0)
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
