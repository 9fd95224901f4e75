use crate::error::{AppError, AppResult};
use crate::models::{AvailabilityWindow, TrainerAvailability};
use crate::repositories::{AvailabilityRepository, UserRepository};
use chrono::NaiveTime;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Registry of trainer availability windows
pub struct AvailabilityService {
    availability_repo: Arc<AvailabilityRepository>,
    user_repo: Arc<UserRepository>,
}

impl AvailabilityService {
    pub fn new(
        availability_repo: Arc<AvailabilityRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            availability_repo,
            user_repo,
        }
    }

    /// Declare a new availability window for a trainer.
    ///
    /// The window must be well-formed and must not overlap any existing
    /// window for the same trainer and weekday. Windows are immutable
    /// once created.
    pub async fn create_window(
        &self,
        trainer_id: Uuid,
        day_of_week: i64,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AppResult<AvailabilityWindow> {
        info!(
            "Creating availability window: trainer={}, day={}",
            trainer_id, day_of_week
        );

        if end_time <= start_time {
            return Err(AppError::Validation(
                "end_time must be after start_time".into(),
            ));
        }

        if !(1..=7).contains(&day_of_week) {
            return Err(AppError::Validation(
                "day_of_week must be between 1 and 7".into(),
            ));
        }

        let trainer = self
            .user_repo
            .find_by_id(trainer_id)
            .await
            .map_err(AppError::from)?;
        if !trainer.map(|t| t.is_trainer()).unwrap_or(false) {
            return Err(AppError::NotFound("Trainer not found".into()));
        }

        let existing = self
            .availability_repo
            .find_by_trainer_and_day(trainer_id, day_of_week)
            .await
            .map_err(AppError::from)?;

        if existing.iter().any(|w| w.overlaps(start_time, end_time)) {
            return Err(AppError::Conflict(
                "Availability window overlaps with an existing window".into(),
            ));
        }

        let window = AvailabilityWindow::new(trainer_id, day_of_week, start_time, end_time);
        self.availability_repo
            .create(&window)
            .await
            .map_err(AppError::from)
    }

    /// One trainer's windows ordered by (day, start)
    pub async fn list_windows(&self, trainer_id: Uuid) -> AppResult<Vec<AvailabilityWindow>> {
        self.availability_repo
            .find_by_trainer(trainer_id)
            .await
            .map_err(AppError::from)
    }

    /// Club-wide overview of all windows, grouped by trainer name
    pub async fn list_all(&self) -> AppResult<Vec<TrainerAvailability>> {
        self.availability_repo
            .find_all_with_trainers()
            .await
            .map_err(AppError::from)
    }
}
