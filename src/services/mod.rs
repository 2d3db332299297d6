//! 服务层模块

mod prompts;
mod response_parser;
mod suggestion_service;

use thiserror::Error;

use crate::llm::LlmError;

pub use suggestion_service::SuggestionService;

/// 推荐流程中的错误
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// 有字段为空，未调用模型
    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// 模型调用失败
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// 响应不是合法 JSON，或条目缺少字段
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// 响应中没有 alternatives
    #[error("response has no \"alternatives\" key")]
    NoAlternatives,
}
