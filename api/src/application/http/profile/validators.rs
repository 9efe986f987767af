use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProfileValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "rules are required"))]
    pub rules: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "rules cannot be empty"))]
    pub rules: Option<String>,
}
