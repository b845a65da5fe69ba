//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod user_commands;

pub mod handlers;

pub use user_commands::*;
