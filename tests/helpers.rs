#![allow(dead_code)]

use chrono::NaiveTime;
use healthclub_backend::config::DatabaseConfig;
use healthclub_backend::database::{create_pool, run_migrations};
use healthclub_backend::models::*;
use healthclub_backend::AppState;
use sqlx::SqlitePool;

/// Test database: an in-memory SQLite pool with the full schema and the
/// application state wired over it
pub struct TestDatabase {
    pub pool: SqlitePool,
    pub state: AppState,
}

impl TestDatabase {
    /// Create a fresh in-memory database with migrations applied.
    ///
    /// The pool is capped at one connection so the in-memory database
    /// lives as long as the pool does.
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 300,
            max_lifetime_secs: 600,
            test_before_acquire: true,
        };

        let pool = create_pool(&config)
            .await
            .expect("Failed to create test database pool");

        run_migrations(&pool, None)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(pool.clone());

        Self { pool, state }
    }
}

/// Test data fixtures
pub struct TestFixtures {
    pub trainer: User,
    pub member: User,
    pub room: Room,
}

impl TestFixtures {
    /// Create test fixtures with sample data
    pub async fn create(db: &TestDatabase) -> Self {
        let trainer = db
            .state
            .accounts
            .register_trainer("Alex Coach", "alex@club.test")
            .await
            .expect("Failed to create test trainer");

        let member = db
            .state
            .accounts
            .register_member(
                "Jamie Doe",
                "jamie@club.test",
                Some(30),
                None,
                Some(82.5),
                Some(75.0),
            )
            .await
            .expect("Failed to create test member");

        let room = db
            .state
            .scheduling
            .create_room("Studio A", Some(20))
            .await
            .expect("Failed to create test room");

        Self {
            trainer,
            member,
            room,
        }
    }
}

/// Parse an HH:MM time literal
pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("invalid test time literal")
}

/// Declare an availability window for a trainer, panicking on failure
pub async fn give_availability(
    db: &TestDatabase,
    trainer: &User,
    day: i64,
    start: &str,
    end: &str,
) -> AvailabilityWindow {
    db.state
        .availability
        .create_window(trainer.id, day, t(start), t(end))
        .await
        .expect("Failed to create availability window")
}

/// Schedule a class inside existing availability, panicking on failure
pub async fn schedule(
    db: &TestDatabase,
    name: &str,
    trainer: &User,
    day: i64,
    start: &str,
    end: &str,
    room_id: Option<uuid::Uuid>,
    capacity: Option<i64>,
) -> ClassSession {
    db.state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: name.to_string(),
            trainer_id: trainer.id,
            day_of_week: day,
            start_time: t(start),
            end_time: t(end),
            room_id,
            capacity,
        })
        .await
        .expect("Failed to schedule class")
}
