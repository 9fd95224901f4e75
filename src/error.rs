use crate::database::DatabaseError;
use sqlx::Error as SqlxError;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// SQLx database errors
    #[error("SQL error: {0}")]
    Sqlx(#[from] SqlxError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (malformed input: bad time order, out-of-range day,
    /// empty text, non-positive amount)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Requested slot falls outside the trainer's declared availability
    #[error("Not available: {0}")]
    NotAvailable(String),

    /// Conflict errors (overlapping window or session, already-settled bill)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Capacity errors (class or room capacity exceeded)
    #[error("Capacity exceeded: {0}")]
    Capacity(String),

    /// Duplicate errors (duplicate enrollment or email)
    #[error("Duplicate: {0}")]
    Duplicate(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Check if error is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    /// Check if error is a scheduling/billing conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }

    /// Check if error is an availability violation
    pub fn is_not_available(&self) -> bool {
        matches!(self, AppError::NotAvailable(_))
    }

    /// Check if error is a capacity violation
    pub fn is_capacity(&self) -> bool {
        matches!(self, AppError::Capacity(_))
    }
}

/// Repository-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database query error
    #[error("Query error: {0}")]
    Query(SqlxError),

    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Duplicate record
    #[error("Duplicate record: {0}")]
    Duplicate(String),

    /// Constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => AppError::NotFound(msg),
            RepositoryError::Query(e) => AppError::Sqlx(e),
            RepositoryError::Duplicate(msg) => AppError::Duplicate(msg),
            RepositoryError::ConstraintViolation(msg) => AppError::Validation(msg),
        }
    }
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound("Record not found".to_string()),
            SqlxError::Database(db_err) => {
                // SQLite reports constraint failures in the message text
                let message = db_err.message().to_string();
                if message.contains("UNIQUE constraint failed") {
                    RepositoryError::Duplicate(message)
                } else if message.contains("FOREIGN KEY constraint failed") {
                    RepositoryError::ConstraintViolation(message)
                } else {
                    RepositoryError::Query(err)
                }
            }
            _ => RepositoryError::Query(err),
        }
    }
}

/// Convenience function to convert Option<T> to Result<T, AppError>
pub fn option_to_result<T>(opt: Option<T>, error_msg: &str) -> AppResult<T> {
    opt.ok_or_else(|| AppError::NotFound(error_msg.to_string()))
}
