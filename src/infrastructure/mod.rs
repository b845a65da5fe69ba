//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现以及 HTTP 接入层

pub mod http;
pub mod memory;
pub mod persistence;

pub use memory::InMemoryUserRepository;
pub use persistence::sqlite::SqliteUserRepository;
