use crate::error::{AppError, AppResult, RepositoryError};
use crate::models::{ClassSession, Enrollment};
use crate::repositories::{ClassRepository, EnrollmentRepository, UserRepository};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Tracks member-to-class enrollment with capacity and
/// duplicate-registration enforcement
pub struct EnrollmentService {
    enrollment_repo: Arc<EnrollmentRepository>,
    class_repo: Arc<ClassRepository>,
    user_repo: Arc<UserRepository>,
}

impl EnrollmentService {
    pub fn new(
        enrollment_repo: Arc<EnrollmentRepository>,
        class_repo: Arc<ClassRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            enrollment_repo,
            class_repo,
            user_repo,
        }
    }

    /// Register a member for a class.
    ///
    /// Fails if the class does not exist, the member is already
    /// registered, or the class is at capacity.
    pub async fn register_for_class(
        &self,
        member_id: Uuid,
        class_id: Uuid,
    ) -> AppResult<Enrollment> {
        info!(
            "Registering member {} for class {}",
            member_id, class_id
        );

        let member = self
            .user_repo
            .find_by_id(member_id)
            .await
            .map_err(AppError::from)?;
        if !member.map(|m| m.is_member()).unwrap_or(false) {
            return Err(AppError::NotFound("Member not found".into()));
        }

        let session = self
            .class_repo
            .find_by_id(class_id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Class not found".into()))?;

        let existing = self
            .enrollment_repo
            .find_by_member_and_class(member_id, class_id)
            .await
            .map_err(AppError::from)?;
        if existing.is_some() {
            return Err(AppError::Duplicate(
                "Already registered for this class".into(),
            ));
        }

        if let Some(capacity) = session.capacity {
            let current = self
                .enrollment_repo
                .count_by_class(class_id)
                .await
                .map_err(AppError::from)?;

            if current >= capacity {
                return Err(AppError::Capacity("Class is at full capacity".into()));
            }
        }

        let enrollment = Enrollment::new(member_id, class_id);

        // The composite primary key is the backstop for the duplicate
        // pre-check
        self.enrollment_repo
            .create(&enrollment)
            .await
            .map_err(|e| AppError::from(RepositoryError::from(e)))
    }

    /// Classes the member is enrolled in, ordered by (day, start)
    pub async fn enrolled_classes(&self, member_id: Uuid) -> AppResult<Vec<ClassSession>> {
        self.class_repo
            .find_enrolled_by_member(member_id)
            .await
            .map_err(AppError::from)
    }
}
