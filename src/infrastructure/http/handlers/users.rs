//! User HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{CreateUser, DeleteUser, GetUser, ListUsers, UpdateUser};
use crate::domain::user::{User, UserRef};
use crate::infrastructure::http::dto::{ApiResponse, NewUserData, UpdatedUserData};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::FormOrJson;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// POST / PUT 请求体，字段校验交给应用层
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub id: Option<UserRef>,
    pub name: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取用户列表
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.list_users_handler.handle(ListUsers).await?;

    Ok(Json(ApiResponse::success(users)))
}

/// 获取单个用户，不存在时 `data` 为 null
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Option<User>>>, ApiError> {
    let query = GetUser {
        id: UserRef::from(id),
    };

    let user = state.get_user_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(user)))
}

/// 创建用户
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    FormOrJson(form): FormOrJson<UserForm>,
) -> Result<Json<ApiResponse<NewUserData>>, ApiError> {
    let command = CreateUser {
        name: form.name,
        email: form.email,
    };

    let result = state.create_user_handler.handle(command).await?;

    Ok(Json(ApiResponse::created(
        NewUserData {
            name: result.name,
            email: result.email,
        },
        result.id,
    )))
}

/// 更新用户（id 在请求体中）
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    FormOrJson(form): FormOrJson<UserForm>,
) -> Result<Json<ApiResponse<UpdatedUserData>>, ApiError> {
    let command = UpdateUser {
        id: form.id,
        name: form.name,
        email: form.email,
    };

    let result = state.update_user_handler.handle(command).await?;

    Ok(Json(ApiResponse::updated(
        UpdatedUserData {
            id: result.id,
            name: result.name,
            email: result.email,
        },
        result.changes,
    )))
}

/// 删除用户，不存在时 changes 为 0
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let command = DeleteUser {
        id: UserRef::from(id),
    };

    let changes = state.delete_user_handler.handle(command).await?;

    Ok(Json(ApiResponse::deleted(changes)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::infrastructure::http::openapi::{openapi_document, OpenApiInfo};
    use crate::infrastructure::http::{AppState, HttpServer, ServerConfig};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteUserRepository,
    };

    async fn create_test_app() -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Arc::new(SqliteUserRepository::new(pool));
        let openapi = openapi_document(&OpenApiInfo {
            title: "Userbase API".to_string(),
            description: "test".to_string(),
            version: "0.1.0".to_string(),
            server_url: "http://localhost:3000".to_string(),
        });
        HttpServer::new(ServerConfig::default(), AppState::new(repo, Some(openapi))).router()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn form(method: Method, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/users")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn json_body(method: Method, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/users")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = create_test_app().await;

        let (status, body) = send(
            &app,
            form(Method::POST, "name=Leanne+Graham&email=test%40gmail.com"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "success",
                "data": {"name": "Leanne Graham", "email": "test@gmail.com"},
                "id": 1
            })
        );

        let (status, body) = send(&app, get("/users/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "success",
                "data": {"id": 1, "name": "Leanne Graham", "email": "test@gmail.com"}
            })
        );
    }

    #[tokio::test]
    async fn test_create_with_json_body() {
        let app = create_test_app().await;

        let (status, body) = send(
            &app,
            json_body(Method::POST, json!({"name": "Ervin Howell", "email": "ervin@x.io"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["data"]["name"], "Ervin Howell");
    }

    #[tokio::test]
    async fn test_get_missing_user_is_null() {
        let app = create_test_app().await;

        let (status, body) = send(&app, get("/users/9999")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "success", "data": null}));
    }

    #[tokio::test]
    async fn test_create_reports_every_violation() {
        let app = create_test_app().await;

        let (status, body) = send(&app, form(Method::POST, "name=&email=")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "No name specified,No email specified"})
        );

        let (_, body) = send(&app, get("/users")).await;
        assert_eq!(body, json!({"message": "success", "data": []}));
    }

    #[tokio::test]
    async fn test_create_without_body() {
        let app = create_test_app().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/users")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No name specified,No email specified");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = create_test_app().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/users")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\":"))
            .unwrap();

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_list_users() {
        let app = create_test_app().await;
        send(&app, form(Method::POST, "name=a&email=a%40x.io")).await;
        send(&app, form(Method::POST, "name=b&email=b%40x.io")).await;

        let (status, body) = send(&app, get("/users")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "success");
        assert_eq!(
            body["data"],
            json!([
                {"id": 1, "name": "a", "email": "a@x.io"},
                {"id": 2, "name": "b", "email": "b@x.io"}
            ])
        );
    }

    #[tokio::test]
    async fn test_update_existing_user() {
        let app = create_test_app().await;
        send(&app, form(Method::POST, "name=a&email=a%40x.io")).await;

        let (status, body) = send(
            &app,
            form(Method::PUT, "id=1&name=Clementine&email=c%40x.io"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "success",
                "data": {"id": "1", "name": "Clementine", "email": "c@x.io"},
                "changes": 1
            })
        );

        let (_, body) = send(&app, get("/users/1")).await;
        assert_eq!(body["data"]["name"], "Clementine");
    }

    #[tokio::test]
    async fn test_update_echoes_json_id_as_number() {
        let app = create_test_app().await;
        send(&app, form(Method::POST, "name=a&email=a%40x.io")).await;

        let (_, body) = send(
            &app,
            json_body(Method::PUT, json!({"id": 1, "name": "b", "email": "b@x.io"})),
        )
        .await;

        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["changes"], 1);
    }

    #[tokio::test]
    async fn test_update_missing_user_reports_zero_changes() {
        let app = create_test_app().await;

        let (status, body) = send(
            &app,
            json_body(Method::PUT, json!({"id": 42, "name": "a", "email": "b"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "success");
        assert_eq!(body["changes"], 0);
    }

    #[tokio::test]
    async fn test_update_requires_id_name_and_email() {
        let app = create_test_app().await;

        let (status, body) = send(&app, json_body(Method::PUT, json!({"name": "a"}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Please input id,No email specified"})
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let app = create_test_app().await;
        send(&app, form(Method::POST, "name=a&email=a%40x.io")).await;

        let (status, body) = send(&app, delete("/users/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "deleted", "changes": 1}));

        let (_, body) = send(&app, get("/users/1")).await;
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let app = create_test_app().await;

        let (status, body) = send(&app, delete("/users/9999")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "deleted", "changes": 0}));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = create_test_app().await;

        let (status, body) = send(&app, get("/docs/openapi.json")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Userbase API");
        assert!(body["paths"]["/users/{id}"]["delete"].is_object());
    }

    #[tokio::test]
    async fn test_docs_page_is_html() {
        let app = create_test_app().await;

        let response = app.oneshot(get("/docs")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&body).contains("swagger-ui"));
    }

    #[tokio::test]
    async fn test_docs_not_mounted_when_disabled() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        let repo = Arc::new(SqliteUserRepository::new(pool));
        let app = HttpServer::new(ServerConfig::default(), AppState::new(repo, None)).router();

        let response = app.oneshot(get("/docs")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_storage_error_is_bad_request() {
        // 未迁移的库：users 表不存在
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        let repo = Arc::new(SqliteUserRepository::new(pool));
        let app = HttpServer::new(ServerConfig::default(), AppState::new(repo, None)).router();

        let (status, body) = send(&app, get("/users")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("no such table: users"));
    }
}
