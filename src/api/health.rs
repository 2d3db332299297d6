//! 健康检查端点
//!
//! 除了存活状态，还报告当前的模型提供方、模型名以及 API Key 是否已配置。

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::config::get_config;
use crate::state::AppState;

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: &'static str,
    pub model: String,
    pub api_key_set: bool,
}

impl HealthResponse {
    fn new(state: &AppState, api_key_set: bool) -> Self {
        let provider = state.suggestions.provider();
        Self {
            status: "ok",
            provider: provider.provider_name(),
            model: provider.model_name().to_string(),
            api_key_set,
        }
    }
}

/// 健康检查处理器
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let api_key_set = !get_config().api_key.is_empty();
    Json(HealthResponse::new(&state, api_key_set))
}

/// 创建健康检查路由
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(health_check))
}
