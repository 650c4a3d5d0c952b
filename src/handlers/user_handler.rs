//! User Creation Handler
//!
//! Handles user creation with password hashing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::PasswordHasher;
use crate::dispatcher::RequestHandler;
use crate::domain::{DomainError, NewUser, OperationContext, UserView};
use crate::error::AppResult;
use crate::repository::UserRepository;

use super::{map_store_error, CreateUserCommand};

/// Handler for user creation
pub struct CreateUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl CreateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl RequestHandler<CreateUserCommand> for CreateUserHandler {
    async fn handle(
        &self,
        command: CreateUserCommand,
        context: &OperationContext,
    ) -> AppResult<UserView> {
        // Fast path; the unique index remains the real guard
        if self.repository.find_by_email(&command.email).await?.is_some() {
            return Err(DomainError::email_taken().into());
        }

        let password_hash = self.hasher.hash(&command.password).await?;

        let new_user = NewUser::new(
            command.email,
            password_hash,
            command.first_name,
            command.last_name,
        );

        let user = self
            .repository
            .create(new_user)
            .await
            .map_err(map_store_error)?;

        tracing::info!(
            user_id = user.id,
            correlation_id = ?context.correlation_id,
            "User created"
        );

        Ok(user.into())
    }
}
