use crate::application::http::ingredient::validators::UpdateIngredientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::UpdateIngredientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    put,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Update ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = UpdateIngredientResponse),
        (status = 404, description = "Ingredient not found")
    ),
    request_body = UpdateIngredientValidator
)]
pub async fn update_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateIngredientValidator>,
) -> Result<Response<UpdateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .update_ingredient(UpdateIngredientInput {
            ingredient_id,
            name: payload.name,
            description: payload.description,
            linked_item_codes: payload.linked_item_codes,
            image_url: payload.image_url,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateIngredientResponse { data: ingredient }))
}
