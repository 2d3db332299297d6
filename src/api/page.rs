//! 首页（单页表单）

use axum::{response::Html, routing::get, Router};
use std::sync::Arc;

use crate::state::AppState;

/// 编译期嵌入的页面
const INDEX_HTML: &str = include_str!("../../static/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// 创建首页路由
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
