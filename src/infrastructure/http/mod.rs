//! HTTP Layer - RESTful API + 文档

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use openapi::{openapi_document, OpenApiInfo};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
