use crate::domain::{
    catalog::ports::CatalogItemRepository, generation::ports::LLMClient,
    ingredient::ports::IngredientRepository, menu::ports::MenuRepository,
    profile::ports::ProfileRepository,
};

/// Single entry point for the business logic; every service trait is
/// implemented on it.
#[derive(Clone)]
pub struct Service<PR, CR, IR, MR, LLM>
where
    PR: ProfileRepository,
    CR: CatalogItemRepository,
    IR: IngredientRepository,
    MR: MenuRepository,
    LLM: LLMClient,
{
    pub(crate) profile_repository: PR,
    pub(crate) catalog_item_repository: CR,
    pub(crate) ingredient_repository: IR,
    pub(crate) menu_repository: MR,
    pub(crate) llm_client: LLM,
}

impl<PR, CR, IR, MR, LLM> Service<PR, CR, IR, MR, LLM>
where
    PR: ProfileRepository,
    CR: CatalogItemRepository,
    IR: IngredientRepository,
    MR: MenuRepository,
    LLM: LLMClient,
{
    pub fn new(
        profile_repository: PR,
        catalog_item_repository: CR,
        ingredient_repository: IR,
        menu_repository: MR,
        llm_client: LLM,
    ) -> Self {
        Self {
            profile_repository,
            catalog_item_repository,
            ingredient_repository,
            menu_repository,
            llm_client,
        }
    }
}
