//! In-memory User Repository
//!
//! A process-local store with the same contract as the PostgreSQL one,
//! including the unique email constraint. Used by tests and for running the
//! API without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{NewUser, User, UserId};

use super::{RepositoryError, RepositoryResult, UserRepository};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<UserId, User>,
    next_id: UserId,
}

impl Table {
    fn email_owner(&self, email: &str) -> Option<UserId> {
        self.rows
            .values()
            .find(|user| user.email == email)
            .map(|user| user.id)
    }
}

/// User repository held in process memory
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> RepositoryResult<User> {
        let mut table = self.table.write().await;

        if table.email_owner(&user.email).is_some() {
            return Err(RepositoryError::AlreadyExists(user.email));
        }

        table.next_id += 1;
        let created = user.into_user(table.next_id);
        table.rows.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .email_owner(email)
            .and_then(|id| table.rows.get(&id).cloned()))
    }

    async fn list_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, user: &User) -> RepositoryResult<User> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&user.id) {
            return Err(RepositoryError::NotFound(user.id));
        }

        match table.email_owner(&user.email) {
            Some(owner) if owner != user.id => {
                return Err(RepositoryError::AlreadyExists(user.email.clone()));
            }
            _ => {}
        }

        table.rows.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> RepositoryResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
