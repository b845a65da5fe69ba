//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::{User, UserRef};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 驱动返回的原始错误信息
    #[error("{0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Database(err.to_string())
    }
}

/// User Repository Port
///
/// 单表 `users(id, name, email)` 的全部操作。
/// 未找到不是错误：查询返回 `None`，更新/删除返回 0 行。
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 获取所有用户（存储顺序）
    async fn list_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: &UserRef) -> Result<Option<User>, RepositoryError>;

    /// 插入用户，返回生成的 id
    async fn insert(&self, name: &str, email: &str) -> Result<i64, RepositoryError>;

    /// 更新用户，`None` 字段保留原值，返回受影响行数
    async fn update(
        &self,
        id: &UserRef,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<u64, RepositoryError>;

    /// 删除用户，返回受影响行数
    async fn delete(&self, id: &UserRef) -> Result<u64, RepositoryError>;
}
