//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::SuggestionError;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 表单字段为空
    #[error("Please fill in all fields to get recommendations!")]
    MissingFields(Vec<&'static str>),

    /// 模型调用或解析失败
    #[error("Error getting recommendations: {0}")]
    Recommendation(String),

    /// 返回内容中没有 alternatives
    #[error("Sorry, couldn't find alternatives. Please try again!")]
    NoAlternatives,
}

impl AppError {
    /// 提示级别：缺少输入属于 warning，其余为 error
    fn level(&self) -> &'static str {
        match self {
            AppError::MissingFields(_) => "warning",
            _ => "error",
        }
    }
}

impl From<SuggestionError> for AppError {
    fn from(err: SuggestionError) -> Self {
        match err {
            SuggestionError::MissingFields(fields) => AppError::MissingFields(fields),
            SuggestionError::NoAlternatives => AppError::NoAlternatives,
            SuggestionError::Llm(e) => AppError::Recommendation(e.to_string()),
            SuggestionError::Parse(e) => AppError::Recommendation(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Recommendation(_) => StatusCode::BAD_GATEWAY,
            AppError::NoAlternatives => StatusCode::BAD_GATEWAY,
        };

        let mut body = json!({
            "success": false,
            "level": self.level(),
            "error": self.to_string()
        });
        if let AppError::MissingFields(fields) = &self {
            body["missing"] = json!(fields);
        }

        (status, Json(body)).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
