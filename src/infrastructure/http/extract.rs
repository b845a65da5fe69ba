//! Request Extractors
//!
//! `FormOrJson` 按 Content-Type 选择表单或 JSON 解析。
//! 其他类型或无 Content-Type 时视为空对象，交给字段校验报告缺失字段。

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// 表单或 JSON 请求体
#[derive(Debug, Clone)]
pub struct FormOrJson<T>(pub T);

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let mime = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase());

    match mime.as_deref() {
        Some("application/json") => BodyKind::Json,
        Some(m) if m.starts_with("application/") && m.ends_with("+json") => BodyKind::Json,
        Some("application/x-www-form-urlencoded") => BodyKind::Form,
        _ => BodyKind::Other,
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                Ok(Self(value))
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                Ok(Self(value))
            }
            BodyKind::Other => serde_json::from_str("{}")
                .map(Self)
                .map_err(|e| ApiError::BadRequest(e.to_string())),
        }
    }
}
