//! User Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// 一次请求中的全部字段违规，按出现顺序以逗号拼接
    #[error("{}", .0.join(","))]
    Invalid(Vec<&'static str>),
}

impl UserError {
    pub fn violations(&self) -> &[&'static str] {
        match self {
            UserError::Invalid(violations) => violations,
        }
    }
}
