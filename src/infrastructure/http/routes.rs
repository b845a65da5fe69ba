//! HTTP Routes
//!
//! API Endpoints:
//! - /users              GET     列出所有用户
//! - /users              POST    创建用户（表单或 JSON）
//! - /users              PUT     更新用户（id 在请求体中）
//! - /users/:id          GET     获取单个用户
//! - /users/:id          DELETE  删除用户
//! - /docs               GET     Swagger UI
//! - /docs/openapi.json  GET     OpenAPI 文档
//! - /ping               GET     健康检查

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::openapi::OPENAPI_PATH;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(docs_enabled: bool) -> Router<Arc<AppState>> {
    let router = Router::new()
        .route("/ping", get(handlers::ping))
        .merge(user_routes());

    if docs_enabled {
        router.merge(docs_routes())
    } else {
        router
    }
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .put(handlers::update_user),
        )
        .route(
            "/users/:id",
            get(handlers::get_user).delete(handlers::delete_user),
        )
}

/// Docs 路由
fn docs_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/docs", get(handlers::docs_ui))
        .route(OPENAPI_PATH, get(handlers::openapi_json))
}
