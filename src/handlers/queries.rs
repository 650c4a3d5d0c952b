//! Query definitions
//!
//! Queries read state and never change it.

use serde::{Deserialize, Serialize};

use crate::dispatcher::Request;
use crate::domain::{UserId, UserView};

/// Fetch one user by id
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetUserByIdQuery {
    pub id: UserId,
}

impl GetUserByIdQuery {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

impl Request for GetUserByIdQuery {
    type Response = UserView;
}

/// Fetch one user by exact email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserByEmailQuery {
    pub email: String,
}

impl GetUserByEmailQuery {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Request for GetUserByEmailQuery {
    type Response = UserView;
}

/// Fetch every user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListUsersQuery {}

impl Request for ListUsersQuery {
    type Response = Vec<UserView>;
}
