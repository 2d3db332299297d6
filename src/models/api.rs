//! REST API 请求/响应模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Suggestion;

/// 推荐请求（表单的三个输入）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub city: String,
    #[serde(default, alias = "current_restaurant")]
    pub restaurant: String,
    #[serde(default)]
    pub dish: String,
}

impl SuggestQuery {
    #[cfg(test)]
    pub fn new(
        city: impl Into<String>,
        restaurant: impl Into<String>,
        dish: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            restaurant: restaurant.into(),
            dish: dish.into(),
        }
    }

    /// 为空（或只有空白）的字段名，按表单顺序
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("city", &self.city),
            ("restaurant", &self.restaurant),
            ("dish", &self.dish),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// 推荐响应
#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub success: bool,
    pub request_id: String,
    pub count: usize,
    pub message: String,
    pub alternatives: Vec<Suggestion>,
    pub tips: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl SuggestionResponse {
    pub fn new(request_id: impl Into<String>, alternatives: Vec<Suggestion>) -> Self {
        let count = alternatives.len();
        Self {
            success: true,
            request_id: request_id.into(),
            count,
            message: format!("Found {} great alternatives!", count),
            alternatives,
            tips: vec![
                "Call ahead to confirm availability and current wait times".to_string(),
                "Check reviews on food delivery apps for real-time ratings".to_string(),
            ],
            generated_at: Utc::now(),
        }
    }
}
