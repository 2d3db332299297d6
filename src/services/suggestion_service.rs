//! 餐厅替代推荐服务
//!
//! 校验输入 → 构建 Prompt → 调用一次模型 → 去掉代码块 → 解析 JSON

use std::sync::Arc;
use tracing::{info, warn};

use super::prompts::format_alternatives_prompt;
use super::response_parser::{extract_alternatives, parse_alternatives_payload};
use super::SuggestionError;
use crate::llm::LlmProvider;
use crate::models::{SuggestQuery, Suggestion};

/// 推荐服务
#[derive(Debug, Clone)]
pub struct SuggestionService {
    provider: Arc<dyn LlmProvider>,
}

impl SuggestionService {
    /// 创建新的推荐服务
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// 当前使用的 LLM 客户端
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// 获取替代餐厅推荐
    ///
    /// 任一字段为空时直接返回 [`SuggestionError::MissingFields`]，不会调用模型。
    /// 模型只调用一次，失败不重试。
    pub async fn get_restaurant_alternatives(
        &self,
        query: &SuggestQuery,
        request_id: &str,
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        let missing = query.missing_fields();
        if !missing.is_empty() {
            warn!(
                "[{}] Rejected suggestion request, missing fields: {:?}",
                request_id, missing
            );
            return Err(SuggestionError::MissingFields(missing));
        }

        let prompt = format_alternatives_prompt(&query.city, &query.restaurant, &query.dish);
        info!(
            "[{}] Requesting alternatives: city={}, restaurant={}, dish={}, provider={}, model={}",
            request_id,
            query.city,
            query.restaurant,
            query.dish,
            self.provider.provider_name(),
            self.provider.model_name()
        );

        let raw = self.provider.complete(&prompt).await?;

        let payload = parse_alternatives_payload(&raw).map_err(|e| {
            warn!("[{}] Model returned malformed JSON: {}", request_id, e);
            SuggestionError::Parse(e)
        })?;
        let alternatives = extract_alternatives(payload)?;

        info!(
            "[{}] Parsed {} alternatives",
            request_id,
            alternatives.len()
        );
        Ok(alternatives)
    }
}
