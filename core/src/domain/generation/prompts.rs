//! Prompt templates sent to the text-generation service.
//!
//! Inputs are embedded verbatim.

use crate::domain::generation::value_objects::{
    GenerateDailyMenuInput, GenerateMenuSuggestionsInput, NO_DIETARY_RESTRICTIONS,
};

pub fn daily_menu_prompt(input: &GenerateDailyMenuInput) -> String {
    format!(
        "You are a dietitian specializing in creating daily menus based on service and pathology profiles.

You will use the provided service profile, pathology profile, and date to generate a daily menu that adheres to the dietary rules and nutritional needs of the specified profiles.

Service Profile: {service}
Pathology Profile: {pathology}
Date: {date}

Generate a detailed daily menu, including breakfast, lunch, dinner, and snacks, that is appropriate for the given profiles and date. Format the response as a list.
",
        service = input.service_profile_text,
        pathology = input.pathology_profile_text,
        date = input.date.format("%Y-%m-%d"),
    )
}

pub fn menu_suggestions_prompt(input: &GenerateMenuSuggestionsInput) -> String {
    let restrictions = input
        .dietary_restrictions
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or(NO_DIETARY_RESTRICTIONS);

    format!(
        "You are a dietitian who specializes in generating alternative food suggestions for menus.

Given the following menu and dietary restrictions, generate a few alternative food suggestions with similar nutritional information, so that ingredients can be easily swapped out based on supply or preferences.

Menu: {menu}
Dietary Restrictions: {restrictions}

Please provide the suggestions as a list.
",
        menu = input.menu_text,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn daily_menu_prompt_embeds_inputs_verbatim() {
        let prompt = daily_menu_prompt(&GenerateDailyMenuInput {
            service_profile_text: "Vegetarian: no meat {date}".to_string(),
            pathology_profile_text: "Diabetic: low sugar".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        });

        assert!(prompt.contains("Service Profile: Vegetarian: no meat {date}\n"));
        assert!(prompt.contains("Pathology Profile: Diabetic: low sugar\n"));
        assert!(prompt.contains("Date: 2024-05-01\n"));
    }

    #[test]
    fn missing_restrictions_render_as_none() {
        let prompt = menu_suggestions_prompt(&GenerateMenuSuggestionsInput {
            menu_text: "Breakfast: oats".to_string(),
            dietary_restrictions: Some("  ".to_string()),
        });

        assert!(prompt.contains("Menu: Breakfast: oats\n"));
        assert!(prompt.contains("Dietary Restrictions: None\n"));
    }
}
