//! Health Club Console Application
//!
//! Main entry point for the club management console. Startup wires the
//! configuration, logging, database pool, and migrations, then hands
//! control to the interactive menu loop.

use healthclub_backend::config::AppConfig;
use healthclub_backend::console;
use healthclub_backend::database::{create_pool, run_migrations};
use healthclub_backend::error::{AppError, AppResult};
use healthclub_backend::AppState;
use tracing::{error, info};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("healthclub_backend={},sqlx=warn", config.log_level).into()
            }),
        )
        .init();

    info!("Health Club console starting");
    info!("Environment: {}", config.environment);
    info!("Log level: {}", config.log_level);
    info!("Database: {}", config.database_url());

    // =========================================================================
    // DATABASE SETUP
    // =========================================================================
    let pool = create_pool(&config.database).await.map_err(|e| {
        error!("Failed to create database pool: {}", e);
        AppError::Database(e)
    })?;

    info!("Database connection pool created successfully");

    // Run migrations
    run_migrations(&pool, None).await.map_err(|e| {
        error!("Database migration failed: {}", e);
        AppError::Database(e)
    })?;

    info!("Database migrations completed successfully");

    // =========================================================================
    // SERVICES & INTERACTIVE LOOP
    // =========================================================================
    let state = AppState::new(pool);

    console::run(&state).await;

    info!("Health Club console shutting down");
    Ok(())
}
