use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::{
    catalog::ports::CatalogItemRepository,
    common::{
        entities::app_errors::{CoreError, ensure_required},
        services::Service,
    },
    generation::{
        ports::{LLMClient, PromptClient},
        value_objects::{GenerateDailyMenuInput, GenerateMenuSuggestionsInput, SuggestionSet},
    },
    ingredient::ports::IngredientRepository,
    menu::{
        entities::{DateRange, ScheduledMenu},
        ports::{MenuRepository, MenuService},
        value_objects::{GenerateMenuInput, SetMenuInput},
    },
    profile::{entities::ProfileType, ports::ProfileRepository},
};

impl<PR, CR, IR, MR, LLM> MenuService for Service<PR, CR, IR, MR, LLM>
where
    PR: ProfileRepository,
    CR: CatalogItemRepository,
    IR: IngredientRepository,
    MR: MenuRepository,
    LLM: LLMClient,
{
    async fn get_menu(&self, date: NaiveDate) -> Result<Option<ScheduledMenu>, CoreError> {
        self.menu_repository.get_menu(date).await
    }

    async fn set_menu(&self, input: SetMenuInput) -> Result<ScheduledMenu, CoreError> {
        ensure_required("menu_text", &input.menu_text)?;

        let menu = ScheduledMenu::new(
            input.date,
            input.service_profile_id,
            input.pathology_profile_id,
            input.menu_text,
        );

        self.menu_repository.set_menu(menu).await
    }

    async fn list_menus(&self, range: DateRange) -> Result<Vec<ScheduledMenu>, CoreError> {
        self.menu_repository.list_menus(range).await
    }

    async fn generate_menu(&self, input: GenerateMenuInput) -> Result<ScheduledMenu, CoreError> {
        let service_profile_id = input.service_profile_id.ok_or_else(|| {
            CoreError::Validation("service_profile_id is required".to_string())
        })?;
        let pathology_profile_id = input.pathology_profile_id.ok_or_else(|| {
            CoreError::Validation("pathology_profile_id is required".to_string())
        })?;

        let service_profile = self
            .profile_repository
            .get_profile_by_id(ProfileType::Service, service_profile_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        let pathology_profile = self
            .profile_repository
            .get_profile_by_id(ProfileType::Pathology, pathology_profile_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let generated = self
            .generate_daily_menu(GenerateDailyMenuInput {
                service_profile_text: service_profile.prompt_text(),
                pathology_profile_text: pathology_profile.prompt_text(),
                date: input.date,
            })
            .await?;

        let menu = ScheduledMenu::new(
            input.date,
            service_profile_id,
            pathology_profile_id,
            generated.menu_text,
        );
        let menu = self.menu_repository.set_menu(menu).await?;

        info!(date = %menu.date, "menu scheduled");
        Ok(menu)
    }

    async fn generate_suggestions(&self, date: NaiveDate) -> Result<SuggestionSet, CoreError> {
        let menu = self
            .menu_repository
            .get_menu(date)
            .await?
            .ok_or(CoreError::NotFound)?;

        let pathology_profile = self
            .profile_repository
            .get_profile_by_id(ProfileType::Pathology, menu.pathology_profile_id)
            .await?;
        if pathology_profile.is_none() {
            warn!(
                profile_id = %menu.pathology_profile_id,
                "pathology profile for scheduled menu no longer exists"
            );
        }

        self.generate_menu_suggestions(GenerateMenuSuggestionsInput {
            menu_text: menu.menu_text,
            dietary_restrictions: pathology_profile.map(|profile| profile.rules),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        domain::{
            common::entities::app_errors::CoreError,
            menu::{
                entities::DateRange,
                ports::MenuService,
                value_objects::{GenerateMenuInput, SetMenuInput},
            },
            order_list::ports::OrderListService,
            profile::{
                entities::ProfileType, ports::ProfileService,
                value_objects::{CreateProfileInput, DeleteProfileInput},
            },
        },
        test_support::{failing_service, memory_service},
    };

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn set_input(date: NaiveDate, text: &str) -> SetMenuInput {
        SetMenuInput {
            date,
            service_profile_id: uuid::Uuid::now_v7(),
            pathology_profile_id: uuid::Uuid::now_v7(),
            menu_text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn set_menu_replaces_entry_for_same_date() {
        let service = memory_service();

        service.set_menu(set_input(day(1), "first")).await.unwrap();
        service.set_menu(set_input(day(1), "second")).await.unwrap();

        let menus = service
            .list_menus(DateRange::new(day(1), day(1)).unwrap())
            .await
            .unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].menu_text, "second");
    }

    #[tokio::test]
    async fn list_menus_is_sorted_and_inclusive() {
        let service = memory_service();
        for d in [5, 2, 9, 3, 1] {
            service
                .set_menu(set_input(day(d), &format!("menu {d}")))
                .await
                .unwrap();
        }

        let menus = service
            .list_menus(DateRange::new(day(2), day(5)).unwrap())
            .await
            .unwrap();

        let dates: Vec<_> = menus.iter().map(|m| m.date).collect();
        assert_eq!(dates, vec![day(2), day(3), day(5)]);
    }

    #[tokio::test]
    async fn get_menu_for_empty_date_is_none() {
        let service = memory_service();
        assert_eq!(service.get_menu(day(7)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn generate_menu_stores_echoed_menu() {
        let service = memory_service();
        let veg = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Service,
                name: "Vegetarian".to_string(),
                rules: "no meat".to_string(),
            })
            .await
            .unwrap();
        let diabetic = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Pathology,
                name: "Diabetic".to_string(),
                rules: "low sugar".to_string(),
            })
            .await
            .unwrap();

        let menu = service
            .generate_menu(GenerateMenuInput {
                date: day(1),
                service_profile_id: Some(veg.id),
                pathology_profile_id: Some(diabetic.id),
            })
            .await
            .unwrap();

        assert!(!menu.menu_text.is_empty());
        assert!(menu.menu_text.contains("Vegetarian: no meat"));
        assert!(menu.menu_text.contains("Diabetic: low sugar"));
        assert!(menu.menu_text.contains("2024-05-01"));
        assert_eq!(service.get_menu(day(1)).await.unwrap(), Some(menu));
    }

    #[tokio::test]
    async fn generate_menu_requires_both_profiles() {
        let service = memory_service();

        let missing_id = service
            .generate_menu(GenerateMenuInput {
                date: day(1),
                service_profile_id: None,
                pathology_profile_id: Some(uuid::Uuid::now_v7()),
            })
            .await;
        assert!(matches!(missing_id, Err(CoreError::Validation(_))));

        let unknown = service
            .generate_menu(GenerateMenuInput {
                date: day(1),
                service_profile_id: Some(uuid::Uuid::now_v7()),
                pathology_profile_id: Some(uuid::Uuid::now_v7()),
            })
            .await;
        assert_eq!(unknown, Err(CoreError::NotFound));
        assert_eq!(service.get_menu(day(1)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn generation_failure_leaves_schedule_unchanged() {
        let service = failing_service();
        let s = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Service,
                name: "Standard".to_string(),
                rules: "balanced".to_string(),
            })
            .await
            .unwrap();
        let p = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Pathology,
                name: "Celiac".to_string(),
                rules: "no gluten".to_string(),
            })
            .await
            .unwrap();
        let existing = service
            .set_menu(SetMenuInput {
                date: day(1),
                service_profile_id: s.id,
                pathology_profile_id: p.id,
                menu_text: "kept".to_string(),
            })
            .await
            .unwrap();

        let result = service
            .generate_menu(GenerateMenuInput {
                date: day(1),
                service_profile_id: Some(s.id),
                pathology_profile_id: Some(p.id),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Generation(_))));
        assert_eq!(service.get_menu(day(1)).await.unwrap(), Some(existing));
    }

    #[tokio::test]
    async fn suggestions_fall_back_to_no_restrictions() {
        let service = memory_service();
        service
            .set_menu(set_input(day(2), "Breakfast: oats\nLunch: lentils"))
            .await
            .unwrap();

        let set = service.generate_suggestions(day(2)).await.unwrap();

        assert!(set.suggestions.iter().any(|s| s == "Dietary Restrictions: None"));
        assert!(set.suggestions.iter().any(|s| s == "Lunch: lentils"));
    }

    #[tokio::test]
    async fn suggestions_for_empty_date_are_not_found() {
        let service = memory_service();
        assert_eq!(
            service.generate_suggestions(day(3)).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn deleting_profile_keeps_menus() {
        let service = memory_service();
        let s = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Service,
                name: "Standard".to_string(),
                rules: "balanced".to_string(),
            })
            .await
            .unwrap();
        let mut input = set_input(day(4), "soup");
        input.service_profile_id = s.id;
        service.set_menu(input).await.unwrap();

        service
            .delete_profile(DeleteProfileInput {
                profile_type: ProfileType::Service,
                profile_id: s.id,
            })
            .await
            .unwrap();

        assert!(service.get_menu(day(4)).await.unwrap().is_some());
        let entries = service
            .get_order_list(DateRange::new(day(4), day(4)).unwrap())
            .await
            .unwrap();
        assert_eq!(entries[0].service_profile_name, "Unknown");
    }
}
