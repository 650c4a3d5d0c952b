//! User Service
//!
//! Thin pass-through over the dispatcher for user CRUD.

use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use crate::domain::{OperationContext, UserId, UserView};
use crate::error::AppResult;
use crate::handlers::{
    CreateUserCommand, DeleteUserCommand, GetUserByEmailQuery, GetUserByIdQuery, ListUsersQuery,
    UpdateUserCommand,
};

#[derive(Debug, Clone)]
pub struct UserService {
    dispatcher: Arc<Dispatcher>,
}

impl UserService {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn create_user(
        &self,
        command: CreateUserCommand,
        context: &OperationContext,
    ) -> AppResult<UserView> {
        self.dispatcher.send(command, context).await
    }

    pub async fn get_user_by_id(
        &self,
        id: UserId,
        context: &OperationContext,
    ) -> AppResult<UserView> {
        self.dispatcher.send(GetUserByIdQuery::new(id), context).await
    }

    pub async fn get_user_by_email(
        &self,
        email: impl Into<String>,
        context: &OperationContext,
    ) -> AppResult<UserView> {
        self.dispatcher
            .send(GetUserByEmailQuery::new(email), context)
            .await
    }

    pub async fn list_users(&self, context: &OperationContext) -> AppResult<Vec<UserView>> {
        self.dispatcher.send(ListUsersQuery::default(), context).await
    }

    pub async fn update_user(
        &self,
        command: UpdateUserCommand,
        context: &OperationContext,
    ) -> AppResult<UserView> {
        self.dispatcher.send(command, context).await
    }

    pub async fn delete_user(&self, id: UserId, context: &OperationContext) -> AppResult<()> {
        self.dispatcher.send(DeleteUserCommand::new(id), context).await
    }
}
