//! Domain Layer - 领域层
//!
//! - User Context: 用户实体、标识与字段校验

pub mod user;
