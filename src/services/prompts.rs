//! 推荐 Prompt 模板

/// 格式化餐厅替代推荐 Prompt
///
/// 输入原样插入，不做转义或长度限制。
pub fn format_alternatives_prompt(city: &str, restaurant: &str, dish: &str) -> String {
    format!(
        r#"
You are a restaurant recommendation system. A customer ordered "{dish}" from "{restaurant}" in {city}, but it's taking too long.

Please suggest 4-5 alternative restaurants in {city} that:
1. Serve similar dishes to "{dish}"
2. Are known for faster delivery/service
3. Have good ratings
4. Include a mix of nearby and other locations in the city

For each restaurant, provide:
- Restaurant name
- Cuisine type
- Estimated delivery time
- Distance/location area in {city}
- Why it's a good alternative (brief reason)
- Price range (₹, ₹₹, ₹₹₹)

Assume realistic restaurant names and details for {city}. Make the suggestions practical and diverse.

Format as JSON:
{{
    "alternatives": [
        {{
            "name": "Restaurant Name",
            "cuisine": "Cuisine Type",
            "delivery_time": "15-25 mins",
            "location": "Area name",
            "reason": "Known for quick service and authentic taste",
            "price_range": "₹₹"
        }}
    ]
}}
"#
    )
}
