//! Operation Context
//!
//! Contains metadata about the current request for tracing and for handlers
//! that need to know who is calling.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Context for an operation, threaded from the transport through the
/// dispatcher into every handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationContext {
    /// Authenticated user ID from a validated bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Authenticated user email from a validated bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,

    /// Correlation ID for request tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
}

impl OperationContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context with the authenticated principal
    pub fn with_user(mut self, user_id: UserId, email: impl Into<String>) -> Self {
        self.user_id = Some(user_id);
        self.user_email = Some(email.into());
        self
    }

    /// Create context with correlation ID
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Generate a new correlation ID if not present
    pub fn ensure_correlation_id(&mut self) -> Uuid {
        *self.correlation_id.get_or_insert_with(Uuid::new_v4)
    }
}
