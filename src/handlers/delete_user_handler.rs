//! Delete User Handler
//!
//! Handles permanent removal of a user.

use std::sync::Arc;

use async_trait::async_trait;

use crate::dispatcher::RequestHandler;
use crate::domain::{DomainError, OperationContext};
use crate::error::AppResult;
use crate::repository::UserRepository;

use super::{map_store_error, DeleteUserCommand};

/// Handler for user deletion
pub struct DeleteUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<DeleteUserCommand> for DeleteUserHandler {
    async fn handle(&self, command: DeleteUserCommand, context: &OperationContext) -> AppResult<()> {
        if self.repository.find_by_id(command.id).await?.is_none() {
            return Err(DomainError::user_not_found(command.id).into());
        }

        self.repository
            .delete(command.id)
            .await
            .map_err(map_store_error)?;

        tracing::info!(
            user_id = command.id,
            correlation_id = ?context.correlation_id,
            "User deleted"
        );

        Ok(())
    }
}
