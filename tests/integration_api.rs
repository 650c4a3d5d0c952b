//! API Integration Tests
//!
//! Drive the full router (middleware included) over the in-memory store.

use axum::http::StatusCode;
use serde_json::json;

use user_auth_api::auth::TokenService;
use user_auth_api::UserView;

mod common;

use common::{request, send, signup, test_app, TEST_SECRET};

fn create_body(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": "secret1",
        "firstName": "Alice",
        "lastName": "Smith",
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, request("GET", "/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "up" }));
}

#[tokio::test]
async fn test_create_then_fetch_scenario() {
    let app = test_app();

    // 1. Create
    let (status, created) = send(
        &app,
        request("POST", "/api/v1/users", Some(create_body("a@x.com")), None),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["email"], "a@x.com");
    assert_eq!(created["firstName"], "Alice");
    assert!(created.get("password").is_none());
    assert!(created.get("passwordHash").is_none());

    // 2. Duplicate
    let (status, body) = send(
        &app,
        request("POST", "/api/v1/users", Some(create_body("a@x.com")), None),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
    assert_eq!(body["errorCode"], "conflict");

    // 3. Protected read without token
    let (status, _) = send(&app, request("GET", "/api/v1/users/1", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 4. Protected read with token
    let (status, login) = send(
        &app,
        request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "a@x.com", "password": "secret1" })),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["token"].as_str().unwrap();

    let (status, fetched) = send(&app, request("GET", "/api/v1/users/1", None, Some(token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_signup_then_login_yields_same_user() {
    let app = test_app();
    let (_, user) = signup(&app, "b@x.com", "password1").await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "b@x.com", "password": "password1" })),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"], user);

    let tokens = TokenService::new(TEST_SECRET, std::time::Duration::from_secs(3600));
    let claims = tokens.validate(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(Some(claims.user_id), user["id"].as_i64());
}

#[tokio::test]
async fn test_legacy_signup_route() {
    let app = test_app();
    let (status, body) = send(
        &app,
        request("POST", "/api/v1/signup", Some(create_body("c@x.com")), None),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_bad_credentials_are_indistinguishable() {
    let app = test_app();
    signup(&app, "a@x.com", "secret1").await;

    let (wrong_status, wrong_body) = send(
        &app,
        request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "a@x.com", "password": "wrong-one" })),
            None,
        ),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "ghost@x.com", "password": "secret1" })),
            None,
        ),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(unknown_status, wrong_status);
}

#[tokio::test]
async fn test_invalid_bodies_are_bad_requests() {
    let app = test_app();

    let mut short_password = create_body("a@x.com");
    short_password["password"] = json!("123");
    let (status, body) = send(
        &app,
        request("POST", "/api/v1/users", Some(short_password), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "validation_error");

    let (status, body) = send(
        &app,
        request("POST", "/api/v1/auth/login", Some(json!({ "email": "a@x.com" })), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "invalid_request");
}

#[tokio::test]
async fn test_bearer_header_is_required() {
    let app = test_app();
    let (token, _) = signup(&app, "a@x.com", "secret1").await;

    for header in [
        format!("Basic {}", token),
        format!("Bearer {} extra", token),
        "Bearer not-a-token".to_string(),
    ] {
        let req = axum::http::Request::builder()
            .uri("/api/v1/users")
            .header("authorization", header)
            .body(axum::body::Body::empty())
            .unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    let (status, users) = send(&app, request("GET", "/api/v1/users", None, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = test_app();
    let (fresh, user) = signup(&app, "a@x.com", "secret1").await;
    let view: UserView = serde_json::from_value(user).unwrap();

    let tokens = TokenService::new(TEST_SECRET, std::time::Duration::from_secs(3600));
    let stale = tokens
        .issue_at(&view, chrono::Utc::now() - chrono::Duration::hours(48))
        .unwrap();

    let (status, body) = send(&app, request("GET", "/api/v1/users", None, Some(&stale))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errorCode"], "invalid_token");

    let (status, _) = send(&app, request("GET", "/api/v1/users", None, Some(&fresh))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_user_by_email_is_public() {
    let app = test_app();
    signup(&app, "a@x.com", "secret1").await;

    let (status, body) = send(&app, request("GET", "/api/v1/users/email/a@x.com", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "a@x.com");

    let (status, _) = send(&app, request("GET", "/api/v1/users/email/b@x.com", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rules() {
    let app = test_app();
    let (token, a) = signup(&app, "a@x.com", "secret1").await;
    let (_, b) = signup(&app, "b@x.com", "secret1").await;
    let b_id = b["id"].as_i64().unwrap();

    // Another user's email
    let (status, _) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/users/{}", b_id),
            Some(json!({ "id": b_id, "email": "a@x.com", "firstName": "B", "lastName": "B" })),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Path and body ids disagree
    let (status, _) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/users/{}", b_id),
            Some(json!({ "id": a["id"], "email": "b@x.com" })),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Own email, new names
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/users/{}", b_id),
            Some(json!({ "id": b_id, "email": "b@x.com", "firstName": "Bea", "lastName": "Bee" })),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Bea");
    assert_eq!(body["createdAt"], b["createdAt"]);

    // Unknown id
    let (status, _) = send(
        &app,
        request(
            "PUT",
            "/api/v1/users/999",
            Some(json!({ "id": 999, "email": "z@x.com" })),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_fetch_is_not_found() {
    let app = test_app();
    let (token, user) = signup(&app, "a@x.com", "secret1").await;
    let uri = format!("/api/v1/users/{}", user["id"]);

    let (status, body) = send(&app, request("DELETE", &uri, None, Some(&token))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send(&app, request("GET", &uri, None, Some(&token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, request("DELETE", &uri, None, Some(&token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_path_id_is_bad_request() {
    let app = test_app();
    let (token, _) = signup(&app, "a@x.com", "secret1").await;

    let (status, body) = send(&app, request("GET", "/api/v1/users/abc", None, Some(&token))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request: Invalid user ID");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = test_app();
    let req = axum::http::Request::builder()
        .uri("/health")
        .header("x-request-id", "6f1c2d7e-0000-4000-8000-000000000001")
        .body(axum::body::Body::empty())
        .unwrap();

    use tower::util::ServiceExt;
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(
        response.headers()["x-request-id"],
        "6f1c2d7e-0000-4000-8000-000000000001"
    );
}
