use crate::models::{User, UserRole};
use sqlx::{Result as SqlxResult, SqlitePool};
use uuid::Uuid;

/// Repository for account data access
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account
    pub async fn create(&self, user: &User) -> SqlxResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, role, email, name, age, gender, current_weight, weight_goal, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            RETURNING id, role, email, name, age, gender, current_weight, weight_goal, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.role)
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.age)
        .bind(&user.gender)
        .bind(user.current_weight)
        .bind(user.weight_goal)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
    }

    /// Find an account by UUID
    pub async fn find_by_id(&self, id: Uuid) -> SqlxResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, role, email, name, age, gender, current_weight, weight_goal, created_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find an account by email, regardless of role
    pub async fn find_by_email(&self, email: &str) -> SqlxResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, role, email, name, age, gender, current_weight, weight_goal, created_at
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find an account by email restricted to one role (login lookup)
    pub async fn find_by_email_and_role(
        &self,
        email: &str,
        role: UserRole,
    ) -> SqlxResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, role, email, name, age, gender, current_weight, weight_goal, created_at
            FROM users
            WHERE email = ?1 AND role = ?2
            "#,
        )
        .bind(email)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
    }

    /// Case-insensitive member lookup by name, first match
    pub async fn find_member_by_name(&self, name: &str) -> SqlxResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, role, email, name, age, gender, current_weight, weight_goal, created_at
            FROM users
            WHERE role = 'member' AND lower(name) = lower(?1)
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
    }

    /// All accounts of one role, oldest first
    pub async fn find_by_role(&self, role: UserRole) -> SqlxResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, role, email, name, age, gender, current_weight, weight_goal, created_at
            FROM users
            WHERE role = ?1
            ORDER BY created_at ASC
            "#,
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
    }

    /// Apply an in-place profile update and return the stored row
    pub async fn update(&self, user: &User) -> SqlxResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = ?2, age = ?3, gender = ?4, current_weight = ?5, weight_goal = ?6
            WHERE id = ?1
            RETURNING id, role, email, name, age, gender, current_weight, weight_goal, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.age)
        .bind(&user.gender)
        .bind(user.current_weight)
        .bind(user.weight_goal)
        .fetch_one(&self.pool)
        .await
    }
}
