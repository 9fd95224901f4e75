use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Room model representing a bookable location with an optional capacity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub capacity: Option<i64>,
}

impl Room {
    /// Create a new Room
    pub fn new(name: String, capacity: Option<i64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            capacity,
        }
    }
}
