use serde_json::json;

/// Returns the response schema for the daily menu prompt
pub fn get_daily_menu_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "menu": {
                "type": "string",
                "description": "The generated daily menu."
            }
        },
        "required": ["menu"]
    })
}

/// Returns the response schema for the menu suggestions prompt
pub fn get_menu_suggestions_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "suggestions": {
                "type": "array",
                "description": "An array of alternative food suggestions.",
                "items": { "type": "string" }
            }
        },
        "required": ["suggestions"]
    })
}
