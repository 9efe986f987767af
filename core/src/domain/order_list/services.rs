use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{
    catalog::ports::CatalogItemRepository,
    common::{entities::app_errors::CoreError, services::Service},
    generation::ports::LLMClient,
    ingredient::ports::IngredientRepository,
    menu::{entities::DateRange, ports::MenuRepository},
    order_list::{
        entities::{OrderListEntry, UNKNOWN_PROFILE_NAME},
        ports::OrderListService,
    },
    profile::{entities::ProfileType, ports::ProfileRepository},
};

impl<PR, CR, IR, MR, LLM> OrderListService for Service<PR, CR, IR, MR, LLM>
where
    PR: ProfileRepository,
    CR: CatalogItemRepository,
    IR: IngredientRepository,
    MR: MenuRepository,
    LLM: LLMClient,
{
    async fn get_order_list(&self, range: DateRange) -> Result<Vec<OrderListEntry>, CoreError> {
        let menus = self.menu_repository.list_menus(range).await?;
        let service_names = self.profile_names(ProfileType::Service).await?;
        let pathology_names = self.profile_names(ProfileType::Pathology).await?;

        let entries = menus
            .into_iter()
            .map(|menu| OrderListEntry {
                date: menu.date,
                service_profile_name: resolve_name(&service_names, menu.service_profile_id),
                pathology_profile_name: resolve_name(&pathology_names, menu.pathology_profile_id),
                menu_text: menu.menu_text,
            })
            .collect();

        Ok(entries)
    }
}

impl<PR, CR, IR, MR, LLM> Service<PR, CR, IR, MR, LLM>
where
    PR: ProfileRepository,
    CR: CatalogItemRepository,
    IR: IngredientRepository,
    MR: MenuRepository,
    LLM: LLMClient,
{
    async fn profile_names(
        &self,
        profile_type: ProfileType,
    ) -> Result<HashMap<Uuid, String>, CoreError> {
        let profiles = self.profile_repository.fetch_profiles(profile_type).await?;

        Ok(profiles.into_iter().map(|p| (p.id, p.name)).collect())
    }
}

fn resolve_name(names: &HashMap<Uuid, String>, id: Uuid) -> String {
    names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_PROFILE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        domain::{
            menu::{entities::DateRange, ports::MenuService, value_objects::SetMenuInput},
            order_list::ports::OrderListService,
            profile::{
                entities::ProfileType, ports::ProfileService, value_objects::CreateProfileInput,
            },
        },
        test_support::memory_service,
    };

    #[tokio::test]
    async fn order_list_resolves_profile_names() {
        let service = memory_service();
        let s = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Service,
                name: "Hospital ward".to_string(),
                rules: "three meals".to_string(),
            })
            .await
            .unwrap();
        let p = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Pathology,
                name: "Renal".to_string(),
                rules: "low potassium".to_string(),
            })
            .await
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        service
            .set_menu(SetMenuInput {
                date,
                service_profile_id: s.id,
                pathology_profile_id: p.id,
                menu_text: "Lunch: rice".to_string(),
            })
            .await
            .unwrap();

        let entries = service
            .get_order_list(DateRange::new(date, date).unwrap())
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].service_profile_name, "Hospital ward");
        assert_eq!(entries[0].pathology_profile_name, "Renal");
        assert_eq!(entries[0].menu_text, "Lunch: rice");
    }
}
