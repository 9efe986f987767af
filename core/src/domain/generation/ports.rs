use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::{
        safety::SafetySetting,
        value_objects::{
            GenerateDailyMenuInput, GenerateDailyMenuOutput, GenerateMenuSuggestionsInput,
            SuggestionSet,
        },
    },
};

/// LLM Client trait for calling text-generation models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends `prompt` together with the declared `response_schema` and
    /// returns the raw reply text. An empty `safety_settings` leaves the
    /// backend defaults in place.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
        safety_settings: Vec<SafetySetting>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Builds prompts, calls the [`LLMClient`] and validates replies.
#[cfg_attr(test, mockall::automock)]
pub trait PromptClient: Send + Sync {
    fn generate_daily_menu(
        &self,
        input: GenerateDailyMenuInput,
    ) -> impl Future<Output = Result<GenerateDailyMenuOutput, CoreError>> + Send;

    fn generate_menu_suggestions(
        &self,
        input: GenerateMenuSuggestionsInput,
    ) -> impl Future<Output = Result<SuggestionSet, CoreError>> + Send;
}
