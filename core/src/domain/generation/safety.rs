use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

/// Per-category blocking threshold sent along with a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

impl SafetySetting {
    pub const fn new(category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        Self {
            category,
            threshold,
        }
    }
}

/// Menus for pathologies talk about restricted foods and medical conditions,
/// so dangerous-content filtering is turned off for them.
pub fn daily_menu_safety_settings() -> Vec<SafetySetting> {
    vec![
        SafetySetting::new(HarmCategory::HateSpeech, HarmBlockThreshold::BlockOnlyHigh),
        SafetySetting::new(HarmCategory::DangerousContent, HarmBlockThreshold::BlockNone),
        SafetySetting::new(
            HarmCategory::Harassment,
            HarmBlockThreshold::BlockMediumAndAbove,
        ),
        SafetySetting::new(
            HarmCategory::SexuallyExplicit,
            HarmBlockThreshold::BlockLowAndAbove,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn daily_menu_settings_serialize_to_gemini_names() {
        let body = serde_json::to_value(daily_menu_safety_settings()).unwrap();

        assert_eq!(
            body,
            json!([
                {"category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_ONLY_HIGH"},
                {"category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_NONE"},
                {"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                {"category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_LOW_AND_ABOVE"}
            ])
        );
    }
}
