//! Userbase - 用户记录 REST 服务

use std::sync::Arc;

use userbase::config::{load_config, print_config, AppConfig};
use userbase::infrastructure::http::{
    openapi_document, AppState, HttpServer, OpenApiInfo, ServerConfig,
};
use userbase::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteUserRepository,
};

/// 初始化日志（RUST_LOG 优先于配置文件中的级别）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},userbase={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Userbase v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据库目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    if config.database.migrate {
        run_migrations(&pool).await?;
    }

    let user_repo = Arc::new(SqliteUserRepository::new(pool));

    // API 文档
    let openapi = config.docs.enabled.then(|| {
        openapi_document(&OpenApiInfo {
            title: config.docs.title.clone(),
            description: config.docs.description.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            server_url: config.server.public_base_url(),
        })
    });

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(user_repo, openapi);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
