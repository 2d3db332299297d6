//! QuickEats - Restaurant Alternative Finder
//!
//! 使用 axum 框架构建的单页服务：输入城市、当前餐厅和菜品，由 Gemini 生成替代餐厅推荐。

use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;

use api::create_api_routes;
use config::get_config;
use state::create_shared_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env
    dotenv::dotenv().ok();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quickeats=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting QuickEats...");

    let config = get_config();
    if config.api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set, suggestion requests will fail");
    }

    // 创建共享状态
    let state = create_shared_state(&config).context("failed to create LLM client")?;

    // 配置 CORS（允许所有来源）
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 构建路由
    let app = Router::new()
        .merge(create_api_routes(Arc::clone(&state)))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.socket_addr()?;
    info!(
        "Server listening on: http://{} (model={})",
        addr, config.model
    );

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
