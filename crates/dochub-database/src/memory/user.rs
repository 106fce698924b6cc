//! In-memory user repository.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_entity::user::User;

use crate::repositories::user::UserRepository;

/// In-memory user repository for single-node deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<DashMap<Uuid, User>>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<User>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|entry| entry.value().clone()))
            .collect())
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        let duplicate = self
            .users
            .iter()
            .any(|entry| entry.username == user.username);
        if duplicate {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }
        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}
