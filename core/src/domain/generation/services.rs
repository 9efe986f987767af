use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::domain::{
    catalog::ports::CatalogItemRepository,
    common::{entities::app_errors::CoreError, services::Service},
    generation::{
        ports::{LLMClient, PromptClient},
        prompts::{daily_menu_prompt, menu_suggestions_prompt},
        safety::daily_menu_safety_settings,
        schema::{get_daily_menu_schema, get_menu_suggestions_schema},
        value_objects::{
            DailyMenuReply, GenerateDailyMenuInput, GenerateDailyMenuOutput,
            GenerateMenuSuggestionsInput, MenuSuggestionsReply, SuggestionSet,
        },
    },
    ingredient::ports::IngredientRepository,
    menu::ports::MenuRepository,
    profile::ports::ProfileRepository,
};

impl<PR, CR, IR, MR, LLM> PromptClient for Service<PR, CR, IR, MR, LLM>
where
    PR: ProfileRepository,
    CR: CatalogItemRepository,
    IR: IngredientRepository,
    MR: MenuRepository,
    LLM: LLMClient,
{
    async fn generate_daily_menu(
        &self,
        input: GenerateDailyMenuInput,
    ) -> Result<GenerateDailyMenuOutput, CoreError> {
        let prompt = daily_menu_prompt(&input);
        let raw = self
            .llm_client
            .generate_with_text(
                prompt,
                get_daily_menu_schema(),
                daily_menu_safety_settings(),
            )
            .await?;

        let reply: DailyMenuReply = parse_reply(&raw)?;
        if reply.menu.trim().is_empty() {
            error!("Generated daily menu is empty");
            return Err(CoreError::Generation(
                "generated menu is empty".to_string(),
            ));
        }

        info!(date = %input.date, "daily menu generated");
        Ok(GenerateDailyMenuOutput {
            menu_text: reply.menu,
        })
    }

    async fn generate_menu_suggestions(
        &self,
        input: GenerateMenuSuggestionsInput,
    ) -> Result<SuggestionSet, CoreError> {
        let prompt = menu_suggestions_prompt(&input);
        let raw = self
            .llm_client
            .generate_with_text(prompt, get_menu_suggestions_schema(), Vec::new())
            .await?;

        let reply: MenuSuggestionsReply = parse_reply(&raw)?;

        info!(count = reply.suggestions.len(), "menu suggestions generated");
        Ok(SuggestionSet {
            suggestions: reply.suggestions,
        })
    }
}

/// Decode a reply against its declared shape. Models occasionally wrap
/// JSON in a markdown fence, which is stripped first.
fn parse_reply<T: DeserializeOwned>(raw: &str) -> Result<T, CoreError> {
    let body = strip_code_fence(raw);

    serde_json::from_str(body).map_err(|e| {
        error!("Generated reply does not match the declared schema: {}", e);
        CoreError::Generation(format!("reply does not match the declared schema: {e}"))
    })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);

    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;

    use super::*;
    use crate::{
        application::build_service,
        domain::generation::safety::SafetySetting,
        infrastructure::{llm::EchoLLMClient, storage::InMemoryKeyValueStore},
    };

    /// Echo backend that remembers the safety settings of every call.
    #[derive(Debug, Clone, Default)]
    struct RecordingLLMClient {
        seen: Arc<Mutex<Vec<Vec<SafetySetting>>>>,
    }

    impl LLMClient for RecordingLLMClient {
        async fn generate_with_text(
            &self,
            prompt: String,
            response_schema: serde_json::Value,
            safety_settings: Vec<SafetySetting>,
        ) -> Result<String, CoreError> {
            self.seen.lock().unwrap().push(safety_settings);
            EchoLLMClient
                .generate_with_text(prompt, response_schema, Vec::new())
                .await
        }
    }

    #[tokio::test]
    async fn only_daily_menu_relaxes_safety_thresholds() {
        let llm = RecordingLLMClient::default();
        let service = build_service(InMemoryKeyValueStore::new(), llm.clone());

        service
            .generate_daily_menu(GenerateDailyMenuInput {
                service_profile_text: "Hospital: three meals".to_string(),
                pathology_profile_text: "Renal: low potassium".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            })
            .await
            .unwrap();
        service
            .generate_menu_suggestions(GenerateMenuSuggestionsInput {
                menu_text: "rice and chicken".to_string(),
                dietary_restrictions: None,
            })
            .await
            .unwrap();

        assert_eq!(
            *llm.seen.lock().unwrap(),
            vec![daily_menu_safety_settings(), Vec::new()]
        );
    }

    #[test]
    fn strips_markdown_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn rejects_reply_missing_required_field() {
        let result: Result<DailyMenuReply, _> = parse_reply(r#"{"suggestions": []}"#);
        assert!(matches!(result, Err(CoreError::Generation(_))));
    }

    #[test]
    fn rejects_non_json_reply() {
        let result: Result<MenuSuggestionsReply, _> = parse_reply("here are some ideas");
        assert!(matches!(result, Err(CoreError::Generation(_))));
    }

    #[test]
    fn rejects_wrong_suggestion_types() {
        let result: Result<MenuSuggestionsReply, _> = parse_reply(r#"{"suggestions": [1, 2]}"#);
        assert!(matches!(result, Err(CoreError::Generation(_))));
    }
}
