//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::{GeminiProvider, LlmError, LlmProvider};
use crate::services::SuggestionService;

/// 应用共享状态
///
/// 使用 Arc 包裹以便在多个处理器之间安全共享
#[derive(Clone)]
pub struct AppState {
    /// 推荐服务
    pub suggestions: SuggestionService,
}

impl AppState {
    /// 使用指定的 LLM 客户端创建应用状态
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            suggestions: SuggestionService::new(provider),
        }
    }

    /// 根据配置创建 Gemini 客户端
    pub fn from_config(config: &AppConfig) -> Result<Self, LlmError> {
        let provider = GeminiProvider::new(
            config.api_key.clone(),
            &config.base_url,
            config.model.clone(),
            config.generation_options(),
        )?;
        Ok(Self::new(Arc::new(provider)))
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: &AppConfig) -> Result<Arc<AppState>, LlmError> {
    Ok(Arc::new(AppState::from_config(config)?))
}
