//! Repository Errors
//!
//! Error types for user persistence operations.

use crate::domain::UserId;

/// PostgreSQL SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Errors that can occur in the user repository
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Unique constraint on email fired
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// Update or delete matched no row
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Database error
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl RepositoryError {
    /// Translate a sqlx error, turning unique violations into `AlreadyExists`
    pub fn from_sqlx(err: sqlx::Error, email: &str) -> Self {
        if is_unique_violation(&err) {
            return Self::AlreadyExists(email.to_string());
        }
        Self::Database(err)
    }

    /// Check if this error is a uniqueness conflict
    pub fn is_already_exists(&self) -> bool {
        matches!(self, RepositoryError::AlreadyExists(_))
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}
