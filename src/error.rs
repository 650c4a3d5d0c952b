//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::auth::{PasswordError, TokenError};
use crate::dispatcher::DispatchError;
use crate::domain::DomainError;
use crate::repository::RepositoryError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    // Server errors (5xx)
    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl AppError {
    /// HTTP status and stable error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),

            AppError::Domain(domain_err) => match domain_err {
                DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                DomainError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
                DomainError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
                DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            },

            AppError::Token(TokenError::InvalidToken(_)) => {
                (StatusCode::UNAUTHORIZED, "invalid_token")
            }
            AppError::Token(TokenError::Signing(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "token_signing_error")
            }

            AppError::Repository(RepositoryError::AlreadyExists(_)) => {
                (StatusCode::CONFLICT, "conflict")
            }
            AppError::Repository(RepositoryError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            AppError::Repository(RepositoryError::Database(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
            }

            AppError::Password(_) => (StatusCode::INTERNAL_SERVER_ERROR, "password_error"),
            AppError::Dispatch(_) => (StatusCode::INTERNAL_SERVER_ERROR, "dispatch_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub error_code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        // Server-side failures are logged in full and reported generically
        let error = if status.is_server_error() {
            tracing::error!(error = ?self, error_code, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            status: status.as_u16(),
            error,
            error_code: error_code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
