//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};

use crate::domain::{OperationContext, UserId, UserView};
use crate::error::AppError;
use crate::handlers::{CreateUserCommand, UpdateUserCommand};
use crate::services::{AuthResponse, LoginRequest, SignUpRequest};
use crate::state::AppState;

use super::extract::ValidatedJson;
use super::middleware::auth_middleware;

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
///
/// `POST /users` and `GET /users/email/:email` are public; the remaining user
/// endpoints require a bearer token.
pub fn create_router(state: AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state, auth_middleware);

    Router::new()
        // Auth
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/signup", post(signup))
        // Users
        .route(
            "/users",
            post(create_user).merge(get(list_users).route_layer(auth.clone())),
        )
        .route("/users/email/:email", get(get_user_by_email))
        .route(
            "/users/:id",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .route_layer(auth),
        )
}

fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse::<UserId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::InvalidRequest("Invalid user ID".to_string()))
}

// =========================================================================
// POST /auth/login
// =========================================================================

async fn login(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = state.auth.login(request, &context).await?;
    Ok(Json(response))
}

// =========================================================================
// POST /auth/signup, POST /signup
// =========================================================================

async fn signup(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    ValidatedJson(request): ValidatedJson<SignUpRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response = state.auth.signup(request, &context).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

// =========================================================================
// POST /users
// =========================================================================

async fn create_user(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    ValidatedJson(command): ValidatedJson<CreateUserCommand>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    let user = state.users.create_user(command, &context).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// =========================================================================
// GET /users
// =========================================================================

async fn list_users(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> Result<Json<Vec<UserView>>, AppError> {
    let users = state.users.list_users(&context).await?;
    Ok(Json(users))
}

// =========================================================================
// GET /users/email/:email
// =========================================================================

async fn get_user_by_email(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(email): Path<String>,
) -> Result<Json<UserView>, AppError> {
    if email.trim().is_empty() {
        return Err(AppError::InvalidRequest("Email is required".to_string()));
    }

    let user = state.users.get_user_by_email(email, &context).await?;
    Ok(Json(user))
}

// =========================================================================
// GET /users/:id
// =========================================================================

async fn get_user(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<String>,
) -> Result<Json<UserView>, AppError> {
    let id = parse_user_id(&id)?;
    let user = state.users.get_user_by_id(id, &context).await?;
    Ok(Json(user))
}

// =========================================================================
// PUT /users/:id
// =========================================================================

async fn update_user(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<String>,
    ValidatedJson(command): ValidatedJson<UpdateUserCommand>,
) -> Result<Json<UserView>, AppError> {
    if parse_user_id(&id).ok() != Some(command.id) {
        return Err(AppError::InvalidRequest(
            "ID in path must match ID in body".to_string(),
        ));
    }

    let user = state.users.update_user(command, &context).await?;
    Ok(Json(user))
}

// =========================================================================
// DELETE /users/:id
// =========================================================================

async fn delete_user(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_user_id(&id)?;
    state.users.delete_user(id, &context).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert!(parse_user_id("0").is_err());
        assert!(parse_user_id("-1").is_err());
        assert!(parse_user_id("abc").is_err());
        assert!(parse_user_id("").is_err());
    }
}
