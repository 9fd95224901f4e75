use crate::models::Enrollment;
use sqlx::{Result as SqlxResult, SqlitePool};
use uuid::Uuid;

/// Repository for class enrollment data access
pub struct EnrollmentRepository {
    pool: SqlitePool,
}

impl EnrollmentRepository {
    /// Create a new EnrollmentRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new enrollment
    pub async fn create(&self, enrollment: &Enrollment) -> SqlxResult<Enrollment> {
        sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO enrollments (member_id, class_id, registration_date)
            VALUES (?1, ?2, ?3)
            RETURNING member_id, class_id, registration_date
            "#,
        )
        .bind(enrollment.member_id)
        .bind(enrollment.class_id)
        .bind(enrollment.registration_date)
        .fetch_one(&self.pool)
        .await
    }

    /// Find one member's enrollment in one class
    pub async fn find_by_member_and_class(
        &self,
        member_id: Uuid,
        class_id: Uuid,
    ) -> SqlxResult<Option<Enrollment>> {
        sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT member_id, class_id, registration_date
            FROM enrollments
            WHERE member_id = ?1 AND class_id = ?2
            "#,
        )
        .bind(member_id)
        .bind(class_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Current enrollment count for a class
    pub async fn count_by_class(&self, class_id: Uuid) -> SqlxResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM enrollments
            WHERE class_id = ?1
            "#,
        )
        .bind(class_id)
        .fetch_one(&self.pool)
        .await
    }

}
