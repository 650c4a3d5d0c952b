//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Business-rule outcomes returned by handlers and services.
///
/// These are independent of the web layer; the transport decides which
/// status code each one becomes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or missing input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Bad credentials or missing/invalid token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Uniqueness violation (duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Required record does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Duplicate email on create or update
    pub fn email_taken() -> Self {
        Self::Conflict("email already exists".to_string())
    }

    /// Missing user by id or email
    pub fn user_not_found(identifier: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("user {}", identifier))
    }

    /// Login failure; identical for unknown email and wrong password
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("invalid credentials".to_string())
    }
}
