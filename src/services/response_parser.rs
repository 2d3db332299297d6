//! 模型响应解析
//!
//! 模型返回的文本可能是裸 JSON，也可能被 markdown 代码块包裹。
//! 先去掉代码块标记，再按 JSON 对象解析，最后取出 `alternatives` 列表。

use serde_json::{Map, Value};

use super::SuggestionError;
use crate::models::Suggestion;

/// 代码块标记
const FENCE: &str = "```";

/// 顶层键名
const ALTERNATIVES_KEY: &str = "alternatives";

/// 去掉文本首尾的 markdown 代码块标记
///
/// - 先去掉首尾空白
/// - 开头的 ``` 连同语言标识（json、JSON 或无）以及其后的一个换行一起去掉
/// - 结尾的 ``` 连同其前的一个换行一起去掉
///
/// 没有代码块时只做首尾空白的裁剪，因此重复调用结果不变。
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        let rest = rest.trim_start_matches(is_info_char);
        text = strip_leading_line_break(rest);
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = strip_trailing_line_break(rest);
    }

    text
}

/// 代码块语言标识允许的字符
fn is_info_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.')
}

fn strip_leading_line_break(text: &str) -> &str {
    text.strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or_else(|| text.trim_start_matches([' ', '\t']))
}

fn strip_trailing_line_break(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

/// 去掉代码块并解析为 JSON 对象
pub fn parse_alternatives_payload(raw: &str) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_str(strip_code_fence(raw))
}

/// 从解析后的对象中取出推荐列表
///
/// 缺少 `alternatives` 键返回 [`SuggestionError::NoAlternatives`]，
/// 任一条目缺少字段或类型不对返回 [`SuggestionError::Parse`]。
pub fn extract_alternatives(
    mut payload: Map<String, Value>,
) -> Result<Vec<Suggestion>, SuggestionError> {
    let alternatives = payload
        .remove(ALTERNATIVES_KEY)
        .ok_or(SuggestionError::NoAlternatives)?;
    Ok(serde_json::from_value(alternatives)?)
}
