//! API 路由模块

mod config;
mod health;
mod page;
mod suggest;

pub use config::config_routes;
pub use health::health_routes;
pub use page::page_routes;
pub use suggest::suggest_routes;

use axum::Router;

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(health_routes())
        .merge(config_routes())
        .merge(suggest_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(provider: Arc<FakeProvider>) -> Router {
        create_api_routes(Arc::new(AppState::new(provider)))
    }

    async fn post_suggestions(app: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/suggestions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let provider = Arc::new(FakeProvider::with_response("{}"));
        let response = app(provider)
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["provider"], "fake");
        assert_eq!(body["model"], "fake-model");
        assert!(body["api_key_set"].is_boolean());
    }

    #[tokio::test]
    async fn test_index_page() {
        let provider = Arc::new(FakeProvider::with_response("{}"));
        let response = app(provider)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/api/suggestions"));
    }

    #[tokio::test]
    async fn test_suggestions_success() {
        let provider = Arc::new(FakeProvider::with_response(
            r#"```json
{"alternatives": [{"name": "Burger Singh", "cuisine": "Fast Food", "delivery_time": "15-25 mins",
  "location": "Connaught Place", "reason": "Quick service", "price_range": "₹"}]}
```"#,
        ));
        let (status, body) = post_suggestions(
            app(provider.clone()),
            json!({"city": "Delhi", "restaurant": "KFC", "dish": "Burger"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 1);
        assert_eq!(body["message"], "Found 1 great alternatives!");
        assert_eq!(body["alternatives"][0]["name"], "Burger Singh");
        assert_eq!(body["alternatives"][0]["price_range"], "₹");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_suggestions_missing_fields() {
        let provider = Arc::new(FakeProvider::with_response("{}"));
        let (status, body) = post_suggestions(
            app(provider.clone()),
            json!({"city": "Delhi", "restaurant": "", "dish": "Burger"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["level"], "warning");
        assert_eq!(body["error"], "Please fill in all fields to get recommendations!");
        assert_eq!(body["missing"], json!(["restaurant"]));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_suggestions_provider_failure() {
        let provider = Arc::new(FakeProvider::failing("quota exceeded"));
        let (status, body) = post_suggestions(
            app(provider),
            json!({"city": "Delhi", "restaurant": "KFC", "dish": "Burger"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["level"], "error");
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Error getting recommendations: "));
        assert!(message.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_suggestions_malformed_response() {
        let provider = Arc::new(FakeProvider::with_response("not json"));
        let (status, body) = post_suggestions(
            app(provider),
            json!({"city": "Delhi", "restaurant": "KFC", "dish": "Burger"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Error getting recommendations: "));
    }

    #[tokio::test]
    async fn test_suggestions_without_alternatives_key() {
        let provider = Arc::new(FakeProvider::with_response(r#"{"restaurants": []}"#));
        let (status, body) = post_suggestions(
            app(provider),
            json!({"city": "Delhi", "restaurant": "KFC", "dish": "Burger"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body["error"],
            "Sorry, couldn't find alternatives. Please try again!"
        );
    }
}
