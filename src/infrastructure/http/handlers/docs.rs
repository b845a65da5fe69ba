//! API Docs Handlers

use axum::{extract::State, response::Html, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::infrastructure::http::openapi::swagger_ui_html;
use crate::infrastructure::http::state::AppState;

/// Swagger UI 页面
pub async fn docs_ui(State(state): State<Arc<AppState>>) -> Html<String> {
    let title = state
        .openapi
        .as_ref()
        .and_then(|doc| doc.pointer("/info/title"))
        .and_then(Value::as_str)
        .unwrap_or("API Docs");

    Html(swagger_ui_html(title))
}

/// OpenAPI 文档 JSON
pub async fn openapi_json(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.openapi.clone().unwrap_or(Value::Null))
}
