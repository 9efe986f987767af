use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCatalogItemValidator {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,
}

/// Full replacement. `code` may differ from the path to rename the item.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCatalogItemValidator {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,
}
