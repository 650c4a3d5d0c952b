//! Authentication primitives
//!
//! Bearer token handling and password hashing.

pub mod password;
pub mod token;

pub use password::{PasswordError, PasswordHasher};
pub use token::{Claims, TokenError, TokenService};
