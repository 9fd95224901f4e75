//! Health Club Backend Library
//!
//! This module exposes the club management components for use by the
//! console binary, tests, and other consumers.

pub mod config;
pub mod console;
pub mod database;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use database::Database;
use repositories::*;
use services::*;
use std::sync::Arc;

/// Application state containing all repositories and services
pub struct AppState {
    pub database: Database,
    pub user_repo: Arc<UserRepository>,
    pub room_repo: Arc<RoomRepository>,
    pub availability_repo: Arc<AvailabilityRepository>,
    pub class_repo: Arc<ClassRepository>,
    pub enrollment_repo: Arc<EnrollmentRepository>,
    pub billing_repo: Arc<BillingRepository>,
    pub accounts: AccountService,
    pub availability: AvailabilityService,
    pub scheduling: SchedulingService,
    pub enrollment: EnrollmentService,
    pub billing: BillingService,
}

impl AppState {
    /// Create a new AppState with initialized repositories and services
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        let database = Database::new(pool.clone());

        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let room_repo = Arc::new(RoomRepository::new(pool.clone()));
        let availability_repo = Arc::new(AvailabilityRepository::new(pool.clone()));
        let class_repo = Arc::new(ClassRepository::new(pool.clone()));
        let enrollment_repo = Arc::new(EnrollmentRepository::new(pool.clone()));
        let billing_repo = Arc::new(BillingRepository::new(pool));

        let accounts = AccountService::new(user_repo.clone(), class_repo.clone());
        let availability =
            AvailabilityService::new(availability_repo.clone(), user_repo.clone());
        let scheduling = SchedulingService::new(
            class_repo.clone(),
            availability_repo.clone(),
            room_repo.clone(),
            user_repo.clone(),
        );
        let enrollment = EnrollmentService::new(
            enrollment_repo.clone(),
            class_repo.clone(),
            user_repo.clone(),
        );
        let billing = BillingService::new(billing_repo.clone(), user_repo.clone());

        Self {
            database,
            user_repo,
            room_repo,
            availability_repo,
            class_repo,
            enrollment_repo,
            billing_repo,
            accounts,
            availability,
            scheduling,
            enrollment,
            billing,
        }
    }
}
