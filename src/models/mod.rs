//! 数据模型

mod api;
mod suggestion;

pub use api::{SuggestQuery, SuggestionResponse};
pub use suggestion::Suggestion;
