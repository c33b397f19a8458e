// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// True for failures caused by caller-supplied data (pre-I/O rejects)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, AppError::BadRequest(_))
    }

    /// True for "no matching row" failures
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

// Note: sqlx::Error conversion is handled in infra-sqlite
// by converting to AppError::Database(String) (orphan rules)
