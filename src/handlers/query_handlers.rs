//! Query Handlers
//!
//! Read-throughs to the repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::dispatcher::RequestHandler;
use crate::domain::{DomainError, OperationContext, UserView};
use crate::error::AppResult;
use crate::repository::UserRepository;

use super::{GetUserByEmailQuery, GetUserByIdQuery, ListUsersQuery};

/// Handler for [`GetUserByIdQuery`]
pub struct GetUserByIdHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserByIdHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<GetUserByIdQuery> for GetUserByIdHandler {
    async fn handle(&self, query: GetUserByIdQuery, _context: &OperationContext) -> AppResult<UserView> {
        self.repository
            .find_by_id(query.id)
            .await?
            .map(UserView::from)
            .ok_or_else(|| DomainError::user_not_found(query.id).into())
    }
}

/// Handler for [`GetUserByEmailQuery`]
pub struct GetUserByEmailHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserByEmailHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<GetUserByEmailQuery> for GetUserByEmailHandler {
    async fn handle(
        &self,
        query: GetUserByEmailQuery,
        _context: &OperationContext,
    ) -> AppResult<UserView> {
        self.repository
            .find_by_email(&query.email)
            .await?
            .map(UserView::from)
            .ok_or_else(|| DomainError::user_not_found(&query.email).into())
    }
}

/// Handler for [`ListUsersQuery`]
pub struct ListUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<ListUsersQuery> for ListUsersHandler {
    async fn handle(&self, _query: ListUsersQuery, _context: &OperationContext) -> AppResult<Vec<UserView>> {
        let users = self.repository.list_all().await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }
}
