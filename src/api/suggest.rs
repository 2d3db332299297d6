//! 推荐端点

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{SuggestQuery, SuggestionResponse};
use crate::services::SuggestionError;
use crate::state::AppState;

/// 生成短请求 ID
fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// 获取替代餐厅推荐
async fn suggest_alternatives(
    State(state): State<Arc<AppState>>,
    Json(query): Json<SuggestQuery>,
) -> AppResult<Json<SuggestionResponse>> {
    let request_id = generate_request_id();

    match state
        .suggestions
        .get_restaurant_alternatives(&query, &request_id)
        .await
    {
        Ok(alternatives) => Ok(Json(SuggestionResponse::new(request_id, alternatives))),
        Err(e) => {
            if !matches!(e, SuggestionError::MissingFields(_)) {
                error!("[{}] Error getting recommendations: {}", request_id, e);
            }
            Err(AppError::from(e))
        }
    }
}

/// 创建推荐路由
pub fn suggest_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/suggestions", post(suggest_alternatives))
}
