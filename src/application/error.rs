//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::user::UserError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（已拼接的全部违规信息）
    #[error("{0}")]
    ValidationError(String),

    /// 仓储错误（存储层原始信息）
    #[error("{0}")]
    RepositoryError(String),
}

impl From<UserError> for ApplicationError {
    fn from(err: UserError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}
