use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Enrollment of a member in a class; identified by the
/// (member_id, class_id) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub member_id: Uuid,
    pub class_id: Uuid,
    pub registration_date: NaiveDateTime,
}

impl Enrollment {
    /// Create a new Enrollment stamped with the current time
    pub fn new(member_id: Uuid, class_id: Uuid) -> Self {
        Self {
            member_id,
            class_id,
            registration_date: chrono::Utc::now().naive_utc(),
        }
    }
}
