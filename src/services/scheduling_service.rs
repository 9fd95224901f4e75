use crate::error::{AppError, AppResult, RepositoryError};
use crate::models::{
    ClassScheduleUpdate, ClassSession, Room, ScheduleClassRequest,
};
use crate::repositories::{AvailabilityRepository, ClassRepository, RoomRepository, UserRepository};
use chrono::NaiveTime;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Engine that validates and persists class time slots against trainer
/// availability, trainer conflicts, and room conflicts.
pub struct SchedulingService {
    class_repo: Arc<ClassRepository>,
    availability_repo: Arc<AvailabilityRepository>,
    room_repo: Arc<RoomRepository>,
    user_repo: Arc<UserRepository>,
}

impl SchedulingService {
    pub fn new(
        class_repo: Arc<ClassRepository>,
        availability_repo: Arc<AvailabilityRepository>,
        room_repo: Arc<RoomRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            class_repo,
            availability_repo,
            room_repo,
            user_repo,
        }
    }

    /// Schedule a new class.
    ///
    /// The slot must be well-formed, fully contained in one of the
    /// trainer's availability windows for that weekday, and free of
    /// overlaps with the trainer's and the room's existing classes.
    /// When a room is given and no capacity is requested, the class
    /// inherits the room's capacity; a requested capacity may not
    /// exceed the room's.
    pub async fn schedule_class(&self, request: ScheduleClassRequest) -> AppResult<ClassSession> {
        info!(
            "Scheduling class: name={}, trainer={}, day={}",
            request.name, request.trainer_id, request.day_of_week
        );

        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Class name cannot be empty".into()));
        }

        validate_slot(request.day_of_week, request.start_time, request.end_time)?;

        self.require_trainer(request.trainer_id).await?;
        self.require_availability(
            request.trainer_id,
            request.day_of_week,
            request.start_time,
            request.end_time,
        )
        .await?;
        self.require_trainer_slot_free(
            request.trainer_id,
            request.day_of_week,
            request.start_time,
            request.end_time,
            None,
        )
        .await?;

        let mut capacity = request.capacity;
        if let Some(room_id) = request.room_id {
            let room = self.require_room(room_id).await?;
            self.require_room_slot_free(
                room_id,
                request.day_of_week,
                request.start_time,
                request.end_time,
                None,
            )
            .await?;

            // Capacity defaults to the room's; an explicit request is
            // bounded by it.
            match capacity {
                None => capacity = room.capacity,
                Some(requested) => check_room_capacity(&room, requested)?,
            }
        }

        let session = ClassSession::new(
            request.name,
            request.trainer_id,
            request.room_id,
            request.day_of_week,
            request.start_time,
            request.end_time,
            capacity,
        );

        let created = self
            .class_repo
            .create(&session)
            .await
            .map_err(AppError::from)?;

        info!("Scheduled class {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Reschedule an existing class in place.
    ///
    /// Provided fields are merged over the current values and the merged
    /// candidate is re-validated as a whole, excluding the session's own
    /// id from conflict checks. Capacity is never re-derived from the
    /// room on update; an explicitly carried value is only bounded by
    /// the merged room's capacity.
    pub async fn reschedule_class(
        &self,
        class_id: Uuid,
        update: ClassScheduleUpdate,
    ) -> AppResult<ClassSession> {
        info!("Rescheduling class {}", class_id);

        let current = self
            .class_repo
            .find_by_id(class_id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Class not found".into()))?;

        // Unset fields keep their current value
        let candidate = ClassSession {
            id: current.id,
            name: update.name.unwrap_or(current.name),
            trainer_id: update.trainer_id.unwrap_or(current.trainer_id),
            room_id: update.room_id.or(current.room_id),
            day_of_week: update.day_of_week.unwrap_or(current.day_of_week),
            start_time: update.start_time.unwrap_or(current.start_time),
            end_time: update.end_time.unwrap_or(current.end_time),
            capacity: update.capacity.or(current.capacity),
        };

        if candidate.name.trim().is_empty() {
            return Err(AppError::Validation("Class name cannot be empty".into()));
        }

        validate_slot(candidate.day_of_week, candidate.start_time, candidate.end_time)?;

        self.require_trainer(candidate.trainer_id).await?;
        self.require_availability(
            candidate.trainer_id,
            candidate.day_of_week,
            candidate.start_time,
            candidate.end_time,
        )
        .await?;
        self.require_trainer_slot_free(
            candidate.trainer_id,
            candidate.day_of_week,
            candidate.start_time,
            candidate.end_time,
            Some(candidate.id),
        )
        .await?;

        if let Some(room_id) = candidate.room_id {
            let room = self.require_room(room_id).await?;
            self.require_room_slot_free(
                room_id,
                candidate.day_of_week,
                candidate.start_time,
                candidate.end_time,
                Some(candidate.id),
            )
            .await?;

            if let Some(requested) = candidate.capacity {
                check_room_capacity(&room, requested)?;
            }
        }

        self.class_repo
            .update(&candidate)
            .await
            .map_err(AppError::from)
    }

    /// All scheduled classes ordered by (day, start)
    pub async fn list_classes(&self) -> AppResult<Vec<ClassSession>> {
        self.class_repo.find_all().await.map_err(AppError::from)
    }

    /// One trainer's weekly schedule ordered by (day, start)
    pub async fn trainer_schedule(&self, trainer_id: Uuid) -> AppResult<Vec<ClassSession>> {
        self.class_repo
            .find_by_trainer(trainer_id)
            .await
            .map_err(AppError::from)
    }

    /// Look up one class by id
    pub async fn find_class(&self, class_id: Uuid) -> AppResult<Option<ClassSession>> {
        self.class_repo
            .find_by_id(class_id)
            .await
            .map_err(AppError::from)
    }

    /// Create a bookable room with an optional capacity
    pub async fn create_room(&self, name: &str, capacity: Option<i64>) -> AppResult<Room> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Room name cannot be empty".into()));
        }

        if self
            .room_repo
            .find_by_name(name)
            .await
            .map_err(AppError::from)?
            .is_some()
        {
            return Err(AppError::Duplicate("Room name already in use".into()));
        }

        let room = Room::new(name.to_string(), capacity);
        let created = self
            .room_repo
            .create(&room)
            .await
            .map_err(|e| AppError::from(RepositoryError::from(e)))?;

        info!("Created room {} ({})", created.name, created.id);
        Ok(created)
    }

    /// All rooms ordered by name
    pub async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        self.room_repo.find_all().await.map_err(AppError::from)
    }

    /// Look up one room by id
    pub async fn find_room(&self, room_id: Uuid) -> AppResult<Option<Room>> {
        self.room_repo
            .find_by_id(room_id)
            .await
            .map_err(AppError::from)
    }

    async fn require_trainer(&self, trainer_id: Uuid) -> AppResult<()> {
        let trainer = self
            .user_repo
            .find_by_id(trainer_id)
            .await
            .map_err(AppError::from)?;

        if !trainer.map(|t| t.is_trainer()).unwrap_or(false) {
            return Err(AppError::NotFound("Trainer not found".into()));
        }

        Ok(())
    }

    async fn require_room(&self, room_id: Uuid) -> AppResult<Room> {
        self.room_repo
            .find_by_id(room_id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Room not found".into()))
    }

    /// The slot must be fully contained in one availability window of
    /// the trainer on that weekday
    async fn require_availability(
        &self,
        trainer_id: Uuid,
        day_of_week: i64,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AppResult<()> {
        let windows = self
            .availability_repo
            .find_by_trainer_and_day(trainer_id, day_of_week)
            .await
            .map_err(AppError::from)?;

        if !windows.iter().any(|w| w.covers(start_time, end_time)) {
            return Err(AppError::NotAvailable(
                "Trainer is not available for the requested time window".into(),
            ));
        }

        Ok(())
    }

    async fn require_trainer_slot_free(
        &self,
        trainer_id: Uuid,
        day_of_week: i64,
        start_time: NaiveTime,
        end_time: NaiveTime,
        exclude_id: Option<Uuid>,
    ) -> AppResult<()> {
        let sessions = self
            .class_repo
            .find_by_trainer_and_day(trainer_id, day_of_week)
            .await
            .map_err(AppError::from)?;

        let conflict = sessions
            .iter()
            .filter(|s| Some(s.id) != exclude_id)
            .any(|s| s.overlaps(start_time, end_time));

        if conflict {
            return Err(AppError::Conflict(
                "Trainer is already assigned to another class in that time window".into(),
            ));
        }

        Ok(())
    }

    async fn require_room_slot_free(
        &self,
        room_id: Uuid,
        day_of_week: i64,
        start_time: NaiveTime,
        end_time: NaiveTime,
        exclude_id: Option<Uuid>,
    ) -> AppResult<()> {
        let sessions = self
            .class_repo
            .find_by_room_and_day(room_id, day_of_week)
            .await
            .map_err(AppError::from)?;

        let conflict = sessions
            .iter()
            .filter(|s| Some(s.id) != exclude_id)
            .any(|s| s.overlaps(start_time, end_time));

        if conflict {
            return Err(AppError::Conflict(
                "Room is booked for another class in that time window".into(),
            ));
        }

        Ok(())
    }
}

fn validate_slot(day_of_week: i64, start_time: NaiveTime, end_time: NaiveTime) -> AppResult<()> {
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

    Ok(())
}

fn check_room_capacity(room: &Room, requested: i64) -> AppResult<()> {
    if let Some(room_capacity) = room.capacity {
        if requested > room_capacity {
            return Err(AppError::Capacity(format!(
                "Capacity cannot exceed room capacity ({})",
                room_capacity
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_slot_rejects_inverted_times() {
        assert!(validate_slot(1, t("10:00:00"), t("09:00:00")).is_err());
        assert!(validate_slot(1, t("10:00:00"), t("10:00:00")).is_err());
        assert!(validate_slot(1, t("09:00:00"), t("10:00:00")).is_ok());
    }

    #[test]
    fn test_validate_slot_rejects_out_of_range_day() {
        assert!(validate_slot(0, t("09:00:00"), t("10:00:00")).is_err());
        assert!(validate_slot(8, t("09:00:00"), t("10:00:00")).is_err());
        assert!(validate_slot(7, t("09:00:00"), t("10:00:00")).is_ok());
    }

    #[test]
    fn test_room_capacity_bound() {
        let room = Room::new("Studio A".to_string(), Some(20));
        assert!(check_room_capacity(&room, 20).is_ok());
        assert!(check_room_capacity(&room, 21).is_err());

        let unbounded = Room::new("Field".to_string(), None);
        assert!(check_room_capacity(&unbounded, 500).is_ok());
    }
}
