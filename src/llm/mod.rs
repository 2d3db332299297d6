//! LLM 模块
//!
//! 定义生成式语言模型的调用接口，生产环境使用 Google Gemini。

#[cfg(test)]
mod fake;
mod format;
mod gemini;
mod types;

use async_trait::async_trait;
use std::fmt;

#[cfg(test)]
pub use fake::FakeProvider;
pub use gemini::GeminiProvider;
pub use types::*;

/// LLM 调用接口
///
/// 一次调用对应一次 HTTP 请求，不做重试。
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// 发送 prompt 并返回模型生成的文本
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// 提供方名称，例如 "gemini"
    fn provider_name(&self) -> &'static str;

    /// 模型名称
    fn model_name(&self) -> &str;
}
