use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Weekly availability window declared by a trainer.
/// Windows are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AvailabilityWindow {
    pub id: Uuid,
    pub trainer_id: Uuid,
    pub day_of_week: i64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl AvailabilityWindow {
    /// Create a new AvailabilityWindow
    pub fn new(trainer_id: Uuid, day_of_week: i64, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            trainer_id,
            day_of_week,
            start_time,
            end_time,
        }
    }

    /// Half-open overlap test against another interval on the same day.
    /// Adjacent intervals (end == start) do not overlap.
    pub fn overlaps(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start_time < end && self.end_time > start
    }

    /// Whether the window fully contains the interval [start, end)
    pub fn covers(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start_time <= start && self.end_time >= end
    }
}

/// Availability window paired with the owning trainer's display name,
/// for the club-wide overview listing.
#[derive(Debug, Clone, FromRow)]
pub struct TrainerAvailability {
    pub trainer_name: Option<String>,
    pub trainer_email: String,
    pub day_of_week: i64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
