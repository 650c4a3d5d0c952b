//! User management and authentication API
//!
//! Re-exports modules for integration testing and the server binary.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod services;
pub mod state;

pub use config::Config;
pub use dispatcher::{DispatchError, Dispatcher, Request, RequestHandler};
pub use domain::{DomainError, NewUser, OperationContext, User, UserId, UserView};
pub use error::{AppError, AppResult};
pub use state::AppState;
