use crate::models::ClassSession;
use sqlx::{Result as SqlxResult, SqlitePool};
use uuid::Uuid;

/// Repository for scheduled class data access
pub struct ClassRepository {
    pool: SqlitePool,
}

impl ClassRepository {
    /// Create a new ClassRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new class session
    pub async fn create(&self, session: &ClassSession) -> SqlxResult<ClassSession> {
        sqlx::query_as::<_, ClassSession>(
            r#"
            INSERT INTO classes (id, name, trainer_id, room_id, day_of_week, start_time, end_time, capacity)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING id, name, trainer_id, room_id, day_of_week, start_time, end_time, capacity
            "#,
        )
        .bind(session.id)
        .bind(&session.name)
        .bind(session.trainer_id)
        .bind(session.room_id)
        .bind(session.day_of_week)
        .bind(session.start_time)
        .bind(session.end_time)
        .bind(session.capacity)
        .fetch_one(&self.pool)
        .await
    }

    /// Overwrite a session's schedule state in place
    pub async fn update(&self, session: &ClassSession) -> SqlxResult<ClassSession> {
        sqlx::query_as::<_, ClassSession>(
            r#"
            UPDATE classes
            SET name = ?2, trainer_id = ?3, room_id = ?4, day_of_week = ?5,
                start_time = ?6, end_time = ?7, capacity = ?8
            WHERE id = ?1
            RETURNING id, name, trainer_id, room_id, day_of_week, start_time, end_time, capacity
            "#,
        )
        .bind(session.id)
        .bind(&session.name)
        .bind(session.trainer_id)
        .bind(session.room_id)
        .bind(session.day_of_week)
        .bind(session.start_time)
        .bind(session.end_time)
        .bind(session.capacity)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a class session by UUID
    pub async fn find_by_id(&self, id: Uuid) -> SqlxResult<Option<ClassSession>> {
        sqlx::query_as::<_, ClassSession>(
            r#"
            SELECT id, name, trainer_id, room_id, day_of_week, start_time, end_time, capacity
            FROM classes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Sessions for one trainer on one weekday, for conflict checks
    pub async fn find_by_trainer_and_day(
        &self,
        trainer_id: Uuid,
        day_of_week: i64,
    ) -> SqlxResult<Vec<ClassSession>> {
        sqlx::query_as::<_, ClassSession>(
            r#"
            SELECT id, name, trainer_id, room_id, day_of_week, start_time, end_time, capacity
            FROM classes
            WHERE trainer_id = ?1 AND day_of_week = ?2
            ORDER BY start_time ASC
            "#,
        )
        .bind(trainer_id)
        .bind(day_of_week)
        .fetch_all(&self.pool)
        .await
    }

    /// Sessions in one room on one weekday, for conflict checks
    pub async fn find_by_room_and_day(
        &self,
        room_id: Uuid,
        day_of_week: i64,
    ) -> SqlxResult<Vec<ClassSession>> {
        sqlx::query_as::<_, ClassSession>(
            r#"
            SELECT id, name, trainer_id, room_id, day_of_week, start_time, end_time, capacity
            FROM classes
            WHERE room_id = ?1 AND day_of_week = ?2
            ORDER BY start_time ASC
            "#,
        )
        .bind(room_id)
        .bind(day_of_week)
        .fetch_all(&self.pool)
        .await
    }

    /// All sessions ordered by (day, start)
    pub async fn find_all(&self) -> SqlxResult<Vec<ClassSession>> {
        sqlx::query_as::<_, ClassSession>(
            r#"
            SELECT id, name, trainer_id, room_id, day_of_week, start_time, end_time, capacity
            FROM classes
            ORDER BY day_of_week ASC, start_time ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// One trainer's full weekly schedule, ordered by (day, start)
    pub async fn find_by_trainer(&self, trainer_id: Uuid) -> SqlxResult<Vec<ClassSession>> {
        sqlx::query_as::<_, ClassSession>(
            r#"
            SELECT id, name, trainer_id, room_id, day_of_week, start_time, end_time, capacity
            FROM classes
            WHERE trainer_id = ?1
            ORDER BY day_of_week ASC, start_time ASC
            "#,
        )
        .bind(trainer_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Sessions a member is enrolled in, ordered by (day, start)
    pub async fn find_enrolled_by_member(&self, member_id: Uuid) -> SqlxResult<Vec<ClassSession>> {
        sqlx::query_as::<_, ClassSession>(
            r#"
            SELECT c.id, c.name, c.trainer_id, c.room_id, c.day_of_week,
                   c.start_time, c.end_time, c.capacity
            FROM classes c
            JOIN enrollments e ON e.class_id = c.id
            WHERE e.member_id = ?1
            ORDER BY c.day_of_week ASC, c.start_time ASC
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
    }
}
