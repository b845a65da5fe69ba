//! Data Transfer Objects
//!
//! 所有接口共用的响应信封：`{message, data?, id?, changes?}`

use serde::Serialize;

use crate::domain::user::UserRef;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
///
/// `data` 为 `Some(None)` 时序列化为 `"data": null`，为 `None` 时省略该字段
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<u64>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            message: "success",
            data: Some(data),
            id: None,
            changes: None,
        }
    }

    /// 创建成功，附带生成的 id
    pub fn created(data: T, id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::success(data)
        }
    }

    /// 更新成功，附带受影响行数
    pub fn updated(data: T, changes: u64) -> Self {
        Self {
            changes: Some(changes),
            ..Self::success(data)
        }
    }
}

impl ApiResponse<()> {
    /// 删除响应，无数据
    pub fn deleted(changes: u64) -> Self {
        Self {
            message: "deleted",
            data: None,
            id: None,
            changes: Some(changes),
        }
    }
}

// ============================================================================
// User DTOs
// ============================================================================

/// 创建成功后回显的数据
#[derive(Debug, Serialize)]
pub struct NewUserData {
    pub name: String,
    pub email: String,
}

/// 更新成功后回显的数据，`id` 保持请求中的原样
#[derive(Debug, Serialize)]
pub struct UpdatedUserData {
    pub id: UserRef,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_data_serializes_as_null() {
        let response: ApiResponse<Option<NewUserData>> = ApiResponse::success(None);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"message": "success", "data": null})
        );
    }

    #[test]
    fn test_deleted_omits_data() {
        assert_eq!(
            serde_json::to_value(ApiResponse::deleted(0)).unwrap(),
            json!({"message": "deleted", "changes": 0})
        );
    }
}
