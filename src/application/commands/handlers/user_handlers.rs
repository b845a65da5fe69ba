//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateUser, DeleteUser, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::ports::UserRepositoryPort;
use crate::domain::user::{validate_new_user, validate_user_update, UserRef};

// ============================================================================
// CreateUser
// ============================================================================

/// 创建用户响应
#[derive(Debug, Clone)]
pub struct CreateUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<CreateUserResponse, ApplicationError> {
        let user = validate_new_user(command.name, command.email)?;

        let id = self.user_repo.insert(&user.name, &user.email).await?;

        tracing::info!(user_id = id, name = %user.name, "User created");

        Ok(CreateUserResponse {
            id,
            name: user.name,
            email: user.email,
        })
    }
}

// ============================================================================
// UpdateUser
// ============================================================================

/// 更新用户响应，`id` 按请求原样回显
#[derive(Debug, Clone)]
pub struct UpdateUserResponse {
    pub id: UserRef,
    pub name: String,
    pub email: String,
    pub changes: u64,
}

/// UpdateUser Handler
pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: UpdateUser) -> Result<UpdateUserResponse, ApplicationError> {
        let update = validate_user_update(command.id, command.name, command.email)?;

        let changes = self
            .user_repo
            .update(&update.id, Some(&update.name), Some(&update.email))
            .await?;

        tracing::info!(user_id = %update.id, changes, "User updated");

        Ok(UpdateUserResponse {
            id: update.id,
            name: update.name,
            email: update.email,
            changes,
        })
    }
}

// ============================================================================
// DeleteUser
// ============================================================================

/// DeleteUser Handler
///
/// 不存在的 id 不是错误，返回 0 行
pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<u64, ApplicationError> {
        let changes = self.user_repo.delete(&command.id).await?;

        tracing::info!(user_id = %command.id, changes, "User deleted");

        Ok(changes)
    }
}
