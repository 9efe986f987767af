use tracing::info;

use crate::domain::{
    catalog::ports::CatalogItemRepository,
    common::{
        entities::app_errors::{CoreError, ensure_required},
        services::Service,
    },
    generation::ports::LLMClient,
    ingredient::ports::IngredientRepository,
    menu::ports::MenuRepository,
    profile::{
        entities::{Profile, ProfileType},
        ports::{ProfileRepository, ProfileService},
        value_objects::{
            CreateProfileInput, DeleteProfileInput, GetProfileInput, UpdateProfileInput,
        },
    },
};

impl<PR, CR, IR, MR, LLM> ProfileService for Service<PR, CR, IR, MR, LLM>
where
    PR: ProfileRepository,
    CR: CatalogItemRepository,
    IR: IngredientRepository,
    MR: MenuRepository,
    LLM: LLMClient,
{
    async fn get_profiles(&self, profile_type: ProfileType) -> Result<Vec<Profile>, CoreError> {
        self.profile_repository.fetch_profiles(profile_type).await
    }

    async fn get_profile(&self, input: GetProfileInput) -> Result<Profile, CoreError> {
        self.profile_repository
            .get_profile_by_id(input.profile_type, input.profile_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_profile(&self, input: CreateProfileInput) -> Result<Profile, CoreError> {
        ensure_required("name", &input.name)?;
        ensure_required("rules", &input.rules)?;

        let profile = Profile::new(input.profile_type, input.name, input.rules);
        let profile = self.profile_repository.create_profile(profile).await?;

        info!(profile_id = %profile.id, profile_type = %profile.profile_type, "profile created");
        Ok(profile)
    }

    async fn update_profile(&self, input: UpdateProfileInput) -> Result<Profile, CoreError> {
        if let Some(name) = &input.name {
            ensure_required("name", name)?;
        }
        if let Some(rules) = &input.rules {
            ensure_required("rules", rules)?;
        }

        self.profile_repository.update_profile(input).await
    }

    async fn delete_profile(&self, input: DeleteProfileInput) -> Result<(), CoreError> {
        self.profile_repository
            .delete_profile(input.profile_type, input.profile_id)
            .await?;

        info!(profile_id = %input.profile_id, profile_type = %input.profile_type, "profile deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{
            common::entities::app_errors::CoreError,
            profile::{
                entities::ProfileType,
                ports::ProfileService,
                value_objects::{CreateProfileInput, GetProfileInput, UpdateProfileInput},
            },
        },
        test_support::memory_service,
    };

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let service = memory_service();
        let profile = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Pathology,
                name: "Hypertension".to_string(),
                rules: "low salt".to_string(),
            })
            .await
            .unwrap();

        let updated = service
            .update_profile(UpdateProfileInput {
                profile_type: ProfileType::Pathology,
                profile_id: profile.id,
                name: None,
                rules: Some("under 2g sodium".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Hypertension");
        assert_eq!(updated.rules, "under 2g sodium");
    }

    #[tokio::test]
    async fn profile_is_not_visible_under_other_type() {
        let service = memory_service();
        let profile = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Service,
                name: "Kids".to_string(),
                rules: "small portions".to_string(),
            })
            .await
            .unwrap();

        let result = service
            .get_profile(GetProfileInput {
                profile_type: ProfileType::Pathology,
                profile_id: profile.id,
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn blank_rules_are_rejected() {
        let service = memory_service();

        let result = service
            .create_profile(CreateProfileInput {
                profile_type: ProfileType::Service,
                name: "Kids".to_string(),
                rules: " ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(
            service
                .get_profiles(ProfileType::Service)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
