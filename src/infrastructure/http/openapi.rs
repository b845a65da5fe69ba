//! OpenAPI Document
//!
//! 根据各路由的请求/响应约定生成 OpenAPI 3.0 文档，启动时构建一次，
//! 由 /docs/openapi.json 提供，/docs 页面（Swagger UI）渲染。

use serde_json::{json, Value};

/// 文档元信息
#[derive(Debug, Clone)]
pub struct OpenApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    pub server_url: String,
}

/// 文档 JSON 的挂载路径
pub const OPENAPI_PATH: &str = "/docs/openapi.json";

fn user_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "description": "The user ID.", "example": 1 },
            "name": { "type": "string", "description": "The user's name.", "example": "Leanne Graham" },
            "email": { "type": "string", "description": "The user's email.", "example": "test@gmail.com" }
        }
    })
}

fn error_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "error": {
                "type": "string",
                "description": "Validation messages joined by a comma, or the storage error message.",
                "example": "No name specified,No email specified"
            }
        }
    })
}

/// 请求体同时支持表单与 JSON
fn request_body(schema_ref: &str) -> Value {
    let schema = json!({ "$ref": schema_ref });
    json!({
        "required": true,
        "content": {
            "application/x-www-form-urlencoded": { "schema": schema },
            "application/json": { "schema": schema }
        }
    })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

fn bad_request() -> Value {
    json_response(
        "Validation or storage failure.",
        json!({ "$ref": "#/components/schemas/Error" }),
    )
}

fn id_parameter(description: &str) -> Value {
    json!({
        "in": "path",
        "name": "id",
        "required": true,
        "description": description,
        "schema": { "type": "integer" }
    })
}

fn envelope(message: &str, fields: Value) -> Value {
    let mut properties = json!({ "message": { "type": "string", "example": message } });
    if let (Some(target), Value::Object(extra)) = (properties.as_object_mut(), fields) {
        target.extend(extra);
    }
    json!({ "type": "object", "properties": properties })
}

fn user_ref() -> Value {
    json!({ "$ref": "#/components/schemas/User" })
}

/// GET / POST / PUT /users
fn users_collection() -> Value {
    let list = json!({
        "summary": "Retrieve a list of users.",
        "responses": {
            "200": json_response(
                "A list of users.",
                envelope("success", json!({ "data": { "type": "array", "items": user_ref() } })),
            ),
            "400": bad_request()
        }
    });

    let create = json!({
        "summary": "Create a user.",
        "requestBody": request_body("#/components/schemas/NewUser"),
        "responses": {
            "200": json_response(
                "Created.",
                envelope("success", json!({
                    "data": { "$ref": "#/components/schemas/NewUser" },
                    "id": { "type": "integer", "description": "The generated user ID.", "example": 1 }
                })),
            ),
            "400": bad_request()
        }
    });

    let update = json!({
        "summary": "Update a user.",
        "description": "All of id, name and email are required.",
        "requestBody": request_body("#/components/schemas/UserUpdate"),
        "responses": {
            "200": json_response(
                "Updated. `changes` is 0 when no user has the given id.",
                envelope("success", json!({
                    "data": { "$ref": "#/components/schemas/UserUpdate" },
                    "changes": { "type": "integer", "example": 1 }
                })),
            ),
            "400": bad_request()
        }
    });

    json!({ "get": list, "post": create, "put": update })
}

/// GET / DELETE /users/{id}
fn users_item() -> Value {
    let get = json!({
        "summary": "Retrieve a single user.",
        "description": "`data` is null when no user has the given id.",
        "parameters": [id_parameter("Numeric ID of the user to retrieve.")],
        "responses": {
            "200": json_response(
                "A single user.",
                envelope("success", json!({ "data": { "allOf": [user_ref()], "nullable": true } })),
            ),
            "400": bad_request()
        }
    });

    let delete = json!({
        "summary": "Delete a single user.",
        "parameters": [id_parameter("Numeric ID of the user to delete.")],
        "responses": {
            "200": json_response(
                "Delete was successful. `changes` is 0 when no user had the given id.",
                envelope("deleted", json!({ "changes": { "type": "integer", "example": 1 } })),
            ),
            "400": bad_request()
        }
    });

    json!({ "get": get, "delete": delete })
}

fn schemas() -> Value {
    let name = json!({ "type": "string", "description": "The user's name.", "example": "Leanne Graham" });
    let email = json!({ "type": "string", "description": "The user's email.", "example": "test@gmail.com" });

    json!({
        "User": user_schema(),
        "NewUser": {
            "type": "object",
            "required": ["name", "email"],
            "properties": { "name": name, "email": email }
        },
        "UserUpdate": {
            "type": "object",
            "required": ["id", "name", "email"],
            "properties": {
                "id": { "type": "integer", "description": "The user's id.", "example": 1 },
                "name": name,
                "email": email
            }
        },
        "Error": error_schema()
    })
}

/// 构建完整的 OpenAPI 文档
pub fn openapi_document(info: &OpenApiInfo) -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": info.title,
            "version": info.version,
            "description": info.description
        },
        "servers": [
            { "url": info.server_url, "description": "Configured server" }
        ],
        "paths": {
            "/users": users_collection(),
            "/users/{id}": users_item()
        },
        "components": { "schemas": schemas() }
    })
}

/// Swagger UI 页面，资源从 CDN 加载
pub fn swagger_ui_html(title: &str) -> String {
    let title = title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "{doc_url}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>
"##,
        title = title,
        doc_url = OPENAPI_PATH,
    )
}
