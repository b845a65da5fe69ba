//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（UserRepository）
//! - commands: CQRS 命令及处理器（create / update / delete）
//! - queries: CQRS 查询及处理器（list / get）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{
        CreateUserHandler, CreateUserResponse, DeleteUserHandler, UpdateUserHandler,
        UpdateUserResponse,
    },
    CreateUser, DeleteUser, UpdateUser,
};

pub use error::ApplicationError;

pub use ports::{RepositoryError, UserRepositoryPort};

pub use queries::{
    handlers::{GetUserHandler, ListUsersHandler},
    GetUser, ListUsers,
};
