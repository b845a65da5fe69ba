//! In-Memory User Repository
//!
//! 与 SQLite 实现语义一致的内存仓储，id 自增且不复用

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{RepositoryError, UserRepositoryPort};
use crate::domain::user::{User, UserRef};

/// 内存用户仓储
pub struct InMemoryUserRepository {
    users: DashMap<i64, User>,
    last_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            last_id: AtomicI64::new(0),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn find_by_id(&self, id: &UserRef) -> Result<Option<User>, RepositoryError> {
        Ok(id
            .as_i64()
            .and_then(|id| self.users.get(&id).map(|u| u.value().clone())))
    }

    async fn insert(&self, name: &str, email: &str) -> Result<i64, RepositoryError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.users.insert(
            id,
            User {
                id,
                name: name.to_string(),
                email: email.to_string(),
            },
        );
        tracing::debug!(user_id = id, "User inserted in memory");
        Ok(id)
    }

    async fn update(
        &self,
        id: &UserRef,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<u64, RepositoryError> {
        let Some(mut user) = id.as_i64().and_then(|id| self.users.get_mut(&id)) else {
            return Ok(0);
        };
        if let Some(name) = name {
            user.name = name.to_string();
        }
        if let Some(email) = email {
            user.email = email.to_string();
        }
        Ok(1)
    }

    async fn delete(&self, id: &UserRef) -> Result<u64, RepositoryError> {
        let removed = id.as_i64().and_then(|id| self.users.remove(&id));
        Ok(removed.map_or(0, |_| 1))
    }
}
