//! 推荐结果模型

use serde::{Deserialize, Serialize};

/// 一条由模型生成的餐厅推荐
///
/// 六个字段都由模型编造，这里只保证它们存在且为字符串。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub cuisine: String,
    pub delivery_time: String,
    pub location: String,
    pub reason: String,
    pub price_range: String,
}
