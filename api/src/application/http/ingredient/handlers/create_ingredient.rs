use crate::application::http::ingredient::validators::CreateIngredientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use menuplan_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::CreateIngredientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Create ingredient",
    responses(
        (status = 201, body = CreateIngredientResponse),
        (status = 422, description = "Invalid payload")
    ),
    request_body = CreateIngredientValidator
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateIngredientValidator>,
) -> Result<Response<CreateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .create_ingredient(CreateIngredientInput {
            name: payload.name,
            description: payload.description,
            linked_item_codes: payload.linked_item_codes,
            image_url: payload.image_url,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateIngredientResponse { data: ingredient }))
}
