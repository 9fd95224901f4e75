use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Scheduled fitness class occupying a weekly time slot for one trainer,
/// optionally bound to a room and a capacity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClassSession {
    pub id: Uuid,
    pub name: String,
    pub trainer_id: Uuid,
    pub room_id: Option<Uuid>,
    pub day_of_week: i64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: Option<i64>,
}

impl ClassSession {
    /// Create a new ClassSession
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        trainer_id: Uuid,
        room_id: Option<Uuid>,
        day_of_week: i64,
        start_time: NaiveTime,
        end_time: NaiveTime,
        capacity: Option<i64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            trainer_id,
            room_id,
            day_of_week,
            start_time,
            end_time,
            capacity,
        }
    }

    /// Half-open overlap test against another interval on the same day.
    /// Adjacent slots (one ends where the other starts) do not conflict.
    pub fn overlaps(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start_time < end && self.end_time > start
    }
}

/// Request to schedule a new class
#[derive(Debug, Clone)]
pub struct ScheduleClassRequest {
    pub name: String,
    pub trainer_id: Uuid,
    pub day_of_week: i64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room_id: Option<Uuid>,
    pub capacity: Option<i64>,
}

/// Partial update for an existing class.
/// `None` fields keep their current value; the merged candidate is
/// re-validated as a whole.
#[derive(Debug, Clone, Default)]
pub struct ClassScheduleUpdate {
    pub name: Option<String>,
    pub trainer_id: Option<Uuid>,
    pub room_id: Option<Uuid>,
    pub day_of_week: Option<i64>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub capacity: Option<i64>,
}
