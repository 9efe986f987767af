use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::ingredient::ports::IngredientService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteIngredientResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Delete ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = DeleteIngredientResponse),
        (status = 404, description = "Ingredient not found")
    ),
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteIngredientResponse>, ApiError> {
    state
        .service
        .delete_ingredient(ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteIngredientResponse {
        message: "Ingredient deleted successfully".to_string(),
    }))
}
