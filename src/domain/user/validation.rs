//! User Context - 请求字段校验
//!
//! 校验不会在第一个错误处中断，所有违规都会被收集

use super::{UserError, UserRef};

pub const NO_ID: &str = "Please input id";
pub const NO_NAME: &str = "No name specified";
pub const NO_EMAIL: &str = "No email specified";

/// 校验通过的新建用户数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// 校验通过的更新数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: UserRef,
    pub name: String,
    pub email: String,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 校验创建请求：name 与 email 均必填且非空
pub fn validate_new_user(
    name: Option<String>,
    email: Option<String>,
) -> Result<NewUser, UserError> {
    let mut violations = Vec::new();

    let name = present(name);
    if name.is_none() {
        violations.push(NO_NAME);
    }
    let email = present(email);
    if email.is_none() {
        violations.push(NO_EMAIL);
    }

    match (name, email) {
        (Some(name), Some(email)) => Ok(NewUser { name, email }),
        _ => Err(UserError::Invalid(violations)),
    }
}

/// 校验更新请求：id、name、email 均必填且非空
pub fn validate_user_update(
    id: Option<UserRef>,
    name: Option<String>,
    email: Option<String>,
) -> Result<UserUpdate, UserError> {
    let mut violations = Vec::new();

    let id = id.filter(|id| !id.is_empty());
    if id.is_none() {
        violations.push(NO_ID);
    }
    let name = present(name);
    if name.is_none() {
        violations.push(NO_NAME);
    }
    let email = present(email);
    if email.is_none() {
        violations.push(NO_EMAIL);
    }

    match (id, name, email) {
        (Some(id), Some(name), Some(email)) => Ok(UserUpdate { id, name, email }),
        _ => Err(UserError::Invalid(violations)),
    }
}
