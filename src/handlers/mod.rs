//! Command and Query Handlers module
//!
//! CQRS handlers that orchestrate user operations.
//! Each handler is registered once on the [`Dispatcher`] and talks to the
//! user repository through its trait object.

mod commands;
mod delete_user_handler;
mod queries;
mod query_handlers;
mod update_user_handler;
mod user_handler;


use std::sync::Arc;

pub use commands::*;
pub use delete_user_handler::DeleteUserHandler;
pub use queries::*;
pub use query_handlers::{GetUserByEmailHandler, GetUserByIdHandler, ListUsersHandler};
pub use update_user_handler::UpdateUserHandler;
pub use user_handler::CreateUserHandler;

use crate::auth::PasswordHasher;
use crate::dispatcher::{DispatchError, Dispatcher};
use crate::domain::DomainError;
use crate::error::AppError;
use crate::repository::{RepositoryError, UserRepository};

/// Translate store-level failures of a write into domain errors
pub(crate) fn map_store_error(err: RepositoryError) -> AppError {
    match err {
        RepositoryError::AlreadyExists(_) => DomainError::email_taken().into(),
        RepositoryError::NotFound(id) => DomainError::user_not_found(id).into(),
        other => other.into(),
    }
}

/// Build a dispatcher with every user command and query handler registered
pub fn build_dispatcher(
    repository: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
) -> Result<Dispatcher, DispatchError> {
    let mut dispatcher = Dispatcher::new();

    dispatcher.register::<CreateUserCommand, _>(CreateUserHandler::new(
        repository.clone(),
        hasher,
    ))?;
    dispatcher.register::<UpdateUserCommand, _>(UpdateUserHandler::new(
        repository.clone(),
        hasher,
    ))?;
    dispatcher.register::<DeleteUserCommand, _>(DeleteUserHandler::new(repository.clone()))?;
    dispatcher.register::<GetUserByIdQuery, _>(GetUserByIdHandler::new(repository.clone()))?;
    dispatcher
        .register::<GetUserByEmailQuery, _>(GetUserByEmailHandler::new(repository.clone()))?;
    dispatcher.register::<ListUsersQuery, _>(ListUsersHandler::new(repository))?;

    Ok(dispatcher)
}
