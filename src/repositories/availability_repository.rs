use crate::models::{AvailabilityWindow, TrainerAvailability};
use sqlx::{Result as SqlxResult, SqlitePool};
use uuid::Uuid;

/// Repository for trainer availability windows
pub struct AvailabilityRepository {
    pool: SqlitePool,
}

impl AvailabilityRepository {
    /// Create a new AvailabilityRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new availability window
    pub async fn create(&self, window: &AvailabilityWindow) -> SqlxResult<AvailabilityWindow> {
        sqlx::query_as::<_, AvailabilityWindow>(
            r#"
            INSERT INTO availability_windows (id, trainer_id, day_of_week, start_time, end_time)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, trainer_id, day_of_week, start_time, end_time
            "#,
        )
        .bind(window.id)
        .bind(window.trainer_id)
        .bind(window.day_of_week)
        .bind(window.start_time)
        .bind(window.end_time)
        .fetch_one(&self.pool)
        .await
    }

    /// Windows for one trainer on one weekday, for overlap checks
    pub async fn find_by_trainer_and_day(
        &self,
        trainer_id: Uuid,
        day_of_week: i64,
    ) -> SqlxResult<Vec<AvailabilityWindow>> {
        sqlx::query_as::<_, AvailabilityWindow>(
            r#"
            SELECT id, trainer_id, day_of_week, start_time, end_time
            FROM availability_windows
            WHERE trainer_id = ?1 AND day_of_week = ?2
            ORDER BY start_time ASC
            "#,
        )
        .bind(trainer_id)
        .bind(day_of_week)
        .fetch_all(&self.pool)
        .await
    }

    /// All windows for one trainer, ordered by (day, start)
    pub async fn find_by_trainer(&self, trainer_id: Uuid) -> SqlxResult<Vec<AvailabilityWindow>> {
        sqlx::query_as::<_, AvailabilityWindow>(
            r#"
            SELECT id, trainer_id, day_of_week, start_time, end_time
            FROM availability_windows
            WHERE trainer_id = ?1
            ORDER BY day_of_week ASC, start_time ASC
            "#,
        )
        .bind(trainer_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Club-wide availability overview joined with trainer accounts,
    /// ordered by trainer name
    pub async fn find_all_with_trainers(&self) -> SqlxResult<Vec<TrainerAvailability>> {
        sqlx::query_as::<_, TrainerAvailability>(
            r#"
            SELECT u.name AS trainer_name,
                   u.email AS trainer_email,
                   w.day_of_week,
                   w.start_time,
                   w.end_time
            FROM availability_windows w
            JOIN users u ON u.id = w.trainer_id
            ORDER BY u.name ASC, w.day_of_week ASC, w.start_time ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
