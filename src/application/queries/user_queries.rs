//! User Queries

use crate::domain::user::UserRef;

/// 获取单个用户查询
#[derive(Debug, Clone)]
pub struct GetUser {
    pub id: UserRef,
}

/// 列出所有用户查询
#[derive(Debug, Clone)]
pub struct ListUsers;
