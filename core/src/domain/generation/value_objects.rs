use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NO_DIETARY_RESTRICTIONS: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateDailyMenuInput {
    pub service_profile_text: String,
    pub pathology_profile_text: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateDailyMenuOutput {
    pub menu_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateMenuSuggestionsInput {
    pub menu_text: String,
    pub dietary_restrictions: Option<String>,
}

/// Ordered alternative-food suggestions for a menu. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuggestionSet {
    pub suggestions: Vec<String>,
}

/// Reply shape declared for the daily menu prompt.
#[derive(Debug, Deserialize)]
pub(crate) struct DailyMenuReply {
    pub menu: String,
}

/// Reply shape declared for the suggestions prompt.
#[derive(Debug, Deserialize)]
pub(crate) struct MenuSuggestionsReply {
    pub suggestions: Vec<String>,
}
