//! User Context - 用户限界上下文
//!
//! 职责:
//! - User 实体与标识
//! - 创建/更新请求的字段校验

mod entities;
mod errors;
mod validation;

pub use entities::{User, UserRef};
pub use errors::UserError;
pub use validation::{validate_new_user, validate_user_update, NewUser, UserUpdate};
