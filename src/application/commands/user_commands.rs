//! User Commands

use crate::domain::user::UserRef;

/// 创建用户命令（字段未经校验）
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// 更新用户命令（字段未经校验）
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub id: Option<UserRef>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// 删除用户命令
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub id: UserRef,
}
