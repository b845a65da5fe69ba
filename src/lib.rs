//! Userbase - 用户记录 REST 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户实体与校验规则
//!
//! 应用层 (application/):
//! - Ports: UserRepository 端口
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 列表 / 详情
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + OpenAPI 文档
//! - Persistence: SQLite 存储
//! - Memory: 内存仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
