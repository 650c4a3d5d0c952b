//! Update User Handler
//!
//! Handles profile, email and password changes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::PasswordHasher;
use crate::dispatcher::RequestHandler;
use crate::domain::{DomainError, OperationContext, UserView};
use crate::error::AppResult;
use crate::repository::UserRepository;

use super::{map_store_error, UpdateUserCommand};

/// Handler for user updates
pub struct UpdateUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UpdateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl RequestHandler<UpdateUserCommand> for UpdateUserHandler {
    async fn handle(
        &self,
        command: UpdateUserCommand,
        context: &OperationContext,
    ) -> AppResult<UserView> {
        let mut user = self
            .repository
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(command.id))?;

        if user.email != command.email {
            if let Some(owner) = self.repository.find_by_email(&command.email).await? {
                if owner.id != user.id {
                    return Err(DomainError::email_taken().into());
                }
            }
        }

        if let Some(password) = command.new_password() {
            user.password_hash = self.hasher.hash(password).await?;
        }

        user.email = command.email;
        user.first_name = command.first_name;
        user.last_name = command.last_name;
        user.touch();

        let updated = self
            .repository
            .update(&user)
            .await
            .map_err(map_store_error)?;

        tracing::info!(
            user_id = updated.id,
            correlation_id = ?context.correlation_id,
            "User updated"
        );

        Ok(updated.into())
    }
}
