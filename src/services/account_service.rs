use crate::error::{AppError, AppResult, RepositoryError};
use crate::models::{ClassSession, MemberProfileUpdate, User, UserRole};
use crate::repositories::{ClassRepository, UserRepository};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service for member and trainer accounts
pub struct AccountService {
    user_repo: Arc<UserRepository>,
    class_repo: Arc<ClassRepository>,
}

/// Member profile together with the classes they are enrolled in
pub struct MemberDashboard {
    pub member: User,
    pub enrolled_classes: Vec<ClassSession>,
}

impl AccountService {
    pub fn new(user_repo: Arc<UserRepository>, class_repo: Arc<ClassRepository>) -> Self {
        Self {
            user_repo,
            class_repo,
        }
    }

    /// Register a new member account
    #[allow(clippy::too_many_arguments)]
    pub async fn register_member(
        &self,
        name: &str,
        email: &str,
        age: Option<i64>,
        gender: Option<String>,
        current_weight: Option<f64>,
        weight_goal: Option<f64>,
    ) -> AppResult<User> {
        info!("Registering member: email={}", email);

        self.validate_new_account(name, email).await?;

        let mut user = User::new(UserRole::Member, email.to_string(), Some(name.to_string()));
        user.age = age;
        user.gender = gender;
        user.current_weight = current_weight;
        user.weight_goal = weight_goal;

        self.persist_new_account(user).await
    }

    /// Register a new trainer account
    pub async fn register_trainer(&self, name: &str, email: &str) -> AppResult<User> {
        info!("Registering trainer: email={}", email);

        self.validate_new_account(name, email).await?;

        let user = User::new(UserRole::Trainer, email.to_string(), Some(name.to_string()));
        self.persist_new_account(user).await
    }

    /// Shared registration validation: required fields, email uniqueness
    async fn validate_new_account(&self, name: &str, email: &str) -> AppResult<()> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(AppError::Validation("Name and email are required".into()));
        }

        if self
            .user_repo
            .find_by_email(email)
            .await
            .map_err(AppError::from)?
            .is_some()
        {
            return Err(AppError::Duplicate("Email already registered".into()));
        }

        Ok(())
    }

    async fn persist_new_account(&self, user: User) -> AppResult<User> {
        // The UNIQUE index on email is the backstop for the pre-check
        self.user_repo
            .create(&user)
            .await
            .map_err(|e| AppError::from(RepositoryError::from(e)))
    }

    /// Email lookup for the interactive login flow; no further
    /// authentication is performed
    pub async fn login(&self, email: &str, role: UserRole) -> AppResult<Option<User>> {
        self.user_repo
            .find_by_email_and_role(email, role)
            .await
            .map_err(AppError::from)
    }

    /// Merge a partial profile update over a member's current values
    pub async fn update_member_profile(
        &self,
        member_id: Uuid,
        update: MemberProfileUpdate,
    ) -> AppResult<User> {
        let mut member = self.find_member(member_id).await?;

        if let Some(name) = update.name {
            member.name = Some(name);
        }
        if let Some(age) = update.age {
            member.age = Some(age);
        }
        if let Some(gender) = update.gender {
            member.gender = Some(gender);
        }
        if let Some(current_weight) = update.current_weight {
            member.current_weight = Some(current_weight);
        }
        if let Some(weight_goal) = update.weight_goal {
            member.weight_goal = Some(weight_goal);
        }

        let updated = self
            .user_repo
            .update(&member)
            .await
            .map_err(AppError::from)?;

        info!("Updated profile for member {}", member_id);
        Ok(updated)
    }

    /// Case-insensitive member lookup by name
    pub async fn lookup_member_by_name(&self, name: &str) -> AppResult<Option<User>> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name cannot be empty".into()));
        }

        self.user_repo
            .find_member_by_name(name)
            .await
            .map_err(AppError::from)
    }

    /// Member profile plus enrolled classes ordered by (day, start)
    pub async fn member_dashboard(&self, member_id: Uuid) -> AppResult<MemberDashboard> {
        let member = self.find_member(member_id).await?;

        let enrolled_classes = self
            .class_repo
            .find_enrolled_by_member(member_id)
            .await
            .map_err(AppError::from)?;

        Ok(MemberDashboard {
            member,
            enrolled_classes,
        })
    }

    /// All member accounts, oldest first
    pub async fn list_members(&self) -> AppResult<Vec<User>> {
        self.user_repo
            .find_by_role(UserRole::Member)
            .await
            .map_err(AppError::from)
    }

    /// All trainer accounts, oldest first
    pub async fn list_trainers(&self) -> AppResult<Vec<User>> {
        self.user_repo
            .find_by_role(UserRole::Trainer)
            .await
            .map_err(AppError::from)
    }

    async fn find_member(&self, member_id: Uuid) -> AppResult<User> {
        let user = self
            .user_repo
            .find_by_id(member_id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

        if !user.is_member() {
            return Err(AppError::NotFound("Member not found".into()));
        }

        Ok(user)
    }
}
