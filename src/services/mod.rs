//! Application Services
//!
//! Use-case facades the HTTP layer talks to. Both sit on top of the
//! dispatcher; the auth service additionally reads credentials and signs
//! tokens.

mod auth_service;
mod user_service;

pub use auth_service::{AuthResponse, AuthService, LoginRequest, SignUpRequest};
pub use user_service::UserService;
