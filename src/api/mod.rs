//! API module
//!
//! HTTP API endpoints and middleware.

pub mod extract;
pub mod middleware;
pub mod routes;

use axum::{http::HeaderName, middleware as axum_middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub use routes::create_router;

/// Build the full application router
///
/// Outermost first: request ID, trace span, request ID echo, operation
/// context, request logging.
pub fn build_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(middleware::REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", create_router(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(axum_middleware::from_fn(middleware::context_middleware))
                .layer(axum_middleware::from_fn(middleware::logging_middleware)),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "up" }))
}
