//! Shared application state
//!
//! Everything the HTTP layer needs, wired once at startup and cloned cheaply
//! into each request.

use std::sync::Arc;

use crate::auth::{PasswordHasher, TokenService};
use crate::dispatcher::{DispatchError, Dispatcher};
use crate::handlers::build_dispatcher;
use crate::repository::UserRepository;
use crate::services::{AuthService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub auth: AuthService,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Register all handlers and build the services on top of them
    pub fn new(
        repository: Arc<dyn UserRepository>,
        tokens: TokenService,
        hasher: PasswordHasher,
    ) -> Result<Self, DispatchError> {
        let dispatcher = Arc::new(build_dispatcher(repository.clone(), hasher)?);
        let tokens = Arc::new(tokens);

        tracing::info!(handlers = ?dispatcher.registered_types(), "Dispatcher ready");

        Ok(Self {
            users: UserService::new(dispatcher.clone()),
            auth: AuthService::new(dispatcher, repository, tokens.clone(), hasher),
            tokens,
        })
    }
}
