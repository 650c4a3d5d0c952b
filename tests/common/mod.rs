//! Common test utilities

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

use user_auth_api::api::build_router;
use user_auth_api::auth::{PasswordHasher, TokenService};
use user_auth_api::repository::InMemoryUserRepository;
use user_auth_api::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// Full router over an empty in-memory store
pub fn test_app() -> Router {
    let repository = Arc::new(InMemoryUserRepository::new());
    let tokens = TokenService::new(TEST_SECRET, Duration::from_secs(3600));
    let state = AppState::new(repository, tokens, PasswordHasher::new(4))
        .expect("Failed to build app state");
    build_router(state)
}

/// Build a request with an optional JSON body and bearer token
pub fn request(method: &str, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request and return the status and parsed JSON body (Null if empty)
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    into_parts(response).await
}

async fn into_parts(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Sign up a user and return the issued token and the user body
pub async fn signup(app: &Router, email: &str, password: &str) -> (String, Value) {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/api/v1/auth/signup",
            Some(serde_json::json!({
                "email": email,
                "password": password,
                "firstName": "Test",
                "lastName": "User",
            })),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);

    let token = body["token"].as_str().unwrap().to_string();
    (token, body["user"].clone())
}
