//! User Repository module
//!
//! The persistence contract for user records and its implementations.

mod error;
mod memory;
mod postgres;

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

pub use error::RepositoryError;
pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence contract for users
///
/// Lookups return `Ok(None)` for a missing record; only a failed lookup is an
/// error. Email uniqueness is enforced by the store itself, so `create` and
/// `update` can fail with [`RepositoryError::AlreadyExists`] even after a
/// caller checked first.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its assigned id
    async fn create(&self, user: NewUser) -> RepositoryResult<User>;

    /// Find a user by id
    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;

    /// Find a user by exact email
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;

    /// All users, ordered by id
    async fn list_all(&self) -> RepositoryResult<Vec<User>>;

    /// Persist every mutable field of an existing user
    async fn update(&self, user: &User) -> RepositoryResult<User>;

    /// Remove a user by id
    async fn delete(&self, id: UserId) -> RepositoryResult<()>;
}
