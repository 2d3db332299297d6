//! Google Gemini generateContent 实现

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use super::format::{build_gemini_endpoint, truncate_for_log};
use super::types::{Content, GenerationOptions, LlmError};
use super::LlmProvider;

/// Gemini 请求载荷
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini 响应
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Gemini 客户端
#[derive(Debug)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    options: GenerationOptions,
}

impl GeminiProvider {
    /// 创建新的 Gemini 客户端
    ///
    /// 不校验 API Key 是否存在，缺失时在调用阶段报错
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
        options: GenerationOptions,
    ) -> Result<Self, LlmError> {
        let model = model.into();

        // 构建 HTTP 客户端
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::Http)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: build_gemini_endpoint(base_url, &model),
            model,
            options,
        })
    }

    /// 从响应中提取第一个候选的文本
    fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
        let candidate = match response.candidates.into_iter().next() {
            Some(c) => c,
            None => {
                if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
                    return Err(LlmError::Blocked(reason));
                }
                return Err(LlmError::EmptyResponse);
            }
        };

        let text = candidate.content.map(|c| c.text()).unwrap_or_default();
        if text.trim().is_empty() {
            return match candidate.finish_reason {
                Some(reason) if reason == "SAFETY" || reason == "RECITATION" => {
                    Err(LlmError::Blocked(reason))
                }
                _ => Err(LlmError::EmptyResponse),
            };
        }

        Ok(text)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::NotConfigured(
                "GEMINI_API_KEY is not set".to_string(),
            ));
        }

        // 构建请求体
        let payload = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: GenerationConfig {
                temperature: self.options.temperature,
                max_output_tokens: self.options.max_output_tokens,
            },
        };

        debug!(
            "Gemini API request: endpoint={}, model={}",
            self.endpoint, self.model
        );

        // 发送请求
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        // 检查状态码
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let status_code = status.as_u16();
            error!(
                "Gemini API error: status={}, body={}",
                status_code,
                truncate_for_log(&body, 500)
            );
            return Err(LlmError::Api {
                status: status_code,
                message: body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = Self::extract_text(parsed)?;

        info!(
            "Gemini response received: model={}, length={}",
            self.model,
            text.len()
        );
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
