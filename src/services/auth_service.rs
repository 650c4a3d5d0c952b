//! Auth Service
//!
//! Login and signup. Signup goes through the dispatcher like any other user
//! creation; login reads the stored hash directly since no view exposes it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::{PasswordHasher, TokenService};
use crate::dispatcher::Dispatcher;
use crate::domain::{DomainError, OperationContext, UserView};
use crate::error::{AppError, AppResult};
use crate::handlers::{CreateUserCommand, GetUserByEmailQuery};
use crate::repository::UserRepository;

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Signup request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
}

impl From<SignUpRequest> for CreateUserCommand {
    fn from(request: SignUpRequest) -> Self {
        CreateUserCommand::new(
            request.email,
            request.password,
            request.first_name,
            request.last_name,
        )
    }
}

/// Token plus the user it was issued for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}

#[derive(Clone)]
pub struct AuthService {
    dispatcher: Arc<Dispatcher>,
    repository: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        repository: Arc<dyn UserRepository>,
        tokens: Arc<TokenService>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            dispatcher,
            repository,
            tokens,
            hasher,
        }
    }

    /// Check credentials and issue a token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(
        &self,
        request: LoginRequest,
        context: &OperationContext,
    ) -> AppResult<AuthResponse> {
        let Some(user) = self.repository.find_by_email(&request.email).await? else {
            tracing::warn!(correlation_id = ?context.correlation_id, "Login failed: unknown email");
            return Err(DomainError::invalid_credentials().into());
        };

        let matches = match self.hasher.verify(&request.password, &user.password_hash).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!(user_id = user.id, error = %e, "Stored password hash is unusable");
                false
            }
        };

        if !matches {
            tracing::warn!(
                user_id = user.id,
                correlation_id = ?context.correlation_id,
                "Login failed: wrong password"
            );
            return Err(DomainError::invalid_credentials().into());
        }

        let user = user.to_view();
        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = user.id, correlation_id = ?context.correlation_id, "User logged in");

        Ok(AuthResponse { token, user })
    }

    /// Create an account and issue a token for it
    pub async fn signup(
        &self,
        request: SignUpRequest,
        context: &OperationContext,
    ) -> AppResult<AuthResponse> {
        let email = request.email.clone();
        let created = self
            .dispatcher
            .send(CreateUserCommand::from(request), context)
            .await?;

        // The record may have been deleted or renamed between the two calls
        let user = match self
            .dispatcher
            .send(GetUserByEmailQuery::new(email), context)
            .await
        {
            Ok(user) if user.id == created.id => user,
            Ok(_) | Err(AppError::Domain(DomainError::NotFound(_))) => {
                return Err(DomainError::email_taken().into());
            }
            Err(e) => return Err(e),
        };

        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = user.id, correlation_id = ?context.correlation_id, "User signed up");

        Ok(AuthResponse { token, user })
    }
}
