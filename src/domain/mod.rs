//! Domain module
//!
//! Core domain types: the user entity, its public view, request context and
//! business errors.

pub mod context;
pub mod error;
pub mod user;

pub use context::OperationContext;
pub use error::DomainError;
pub use user::{NewUser, User, UserId, UserView};
