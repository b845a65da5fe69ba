//! HTTP Error Handling
//!
//! 校验失败、请求体解析失败和存储错误都返回 400 `{error}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API 错误
///
/// 存储错误与客户端错误状态码相同，仅日志级别不同
#[derive(Debug)]
pub enum ApiError {
    /// 请求体无法解析
    BadRequest(String),
    /// 字段校验失败
    Validation(String),
    /// 存储层错误，信息原样透出
    Storage(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                msg
            }
            ApiError::Validation(msg) => {
                tracing::warn!(error = %msg, "Validation failed");
                msg
            }
            ApiError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                msg
            }
        };

        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::Validation(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Storage(msg),
        }
    }
}
