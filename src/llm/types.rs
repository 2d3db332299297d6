//! LLM 类型定义

use serde::{Deserialize, Serialize};

/// 生成选项
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// 温度参数
    pub temperature: Option<f64>,
    /// 最大输出 token 数
    pub max_output_tokens: Option<u32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: Some(0.7),
            max_output_tokens: Some(2048),
        }
    }
}

/// Gemini 内容片段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

/// Gemini 内容（一轮对话）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// 创建用户消息
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }

    /// 拼接所有文本片段
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 未配置
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// JSON 解析错误
    #[error("invalid JSON from API: {0}")]
    Json(#[from] serde_json::Error),

    /// 模型没有返回任何文本
    #[error("model returned no content")]
    EmptyResponse,

    /// 请求被安全策略拦截
    #[error("request blocked: {0}")]
    Blocked(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_english() {
        let err = LlmError::Api {
            status: 503,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (503): quota exceeded");
        assert_eq!(LlmError::EmptyResponse.to_string(), "model returned no content");
        assert_eq!(
            LlmError::Blocked("SAFETY".to_string()).to_string(),
            "request blocked: SAFETY"
        );
        assert!(err.to_string().is_ascii());
    }
}
