//! User Context - Entities

use serde::{Deserialize, Serialize};

/// 用户实体
///
/// `id` 由存储在插入时分配，此后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// 客户端传入的用户标识
///
/// 按原样绑定到 SQL，不做类型转换：路径参数和表单字段是字符串，
/// JSON 请求体可能是数字。SQLite 的 NUMERIC 亲和性会让 `"1"` 匹配 id 为 1 的行。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Int(i64),
    Text(String),
}

impl UserRef {
    pub fn is_empty(&self) -> bool {
        matches!(self, UserRef::Text(s) if s.is_empty())
    }

    /// 按 SQLite 比较规则解析为整数 id，非整数文本返回 None
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            UserRef::Int(id) => Some(*id),
            UserRef::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for UserRef {
    fn from(id: i64) -> Self {
        UserRef::Int(id)
    }
}

impl From<String> for UserRef {
    fn from(raw: String) -> Self {
        UserRef::Text(raw)
    }
}

impl From<&str> for UserRef {
    fn from(raw: &str) -> Self {
        UserRef::Text(raw.to_string())
    }
}

impl std::fmt::Display for UserRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRef::Int(id) => write!(f, "{}", id),
            UserRef::Text(s) => write!(f, "{}", s),
        }
    }
}
