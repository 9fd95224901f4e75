use crate::models::Room;
use sqlx::{Result as SqlxResult, SqlitePool};
use uuid::Uuid;

/// Repository for room data access
pub struct RoomRepository {
    pool: SqlitePool,
}

impl RoomRepository {
    /// Create a new RoomRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new room
    pub async fn create(&self, room: &Room) -> SqlxResult<Room> {
        sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (id, name, capacity)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, capacity
            "#,
        )
        .bind(room.id)
        .bind(&room.name)
        .bind(room.capacity)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a room by UUID
    pub async fn find_by_id(&self, id: Uuid) -> SqlxResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, capacity
            FROM rooms
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find a room by its unique name
    pub async fn find_by_name(&self, name: &str) -> SqlxResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, capacity
            FROM rooms
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
    }

    /// All rooms ordered by name
    pub async fn find_all(&self) -> SqlxResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, capacity
            FROM rooms
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
