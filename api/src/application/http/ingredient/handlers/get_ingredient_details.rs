use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::ingredient::{entities::IngredientDetails, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientDetailsResponse {
    pub data: IngredientDetails,
}

#[utoipa::path(
    get,
    path = "/{ingredient_id}/details",
    tag = "ingredient",
    summary = "Get ingredient details",
    description = "Returns the ingredient with each linked code resolved against the catalog. Codes missing from the catalog are described as \"Unknown\".",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = GetIngredientDetailsResponse),
        (status = 404, description = "Ingredient not found")
    ),
)]
pub async fn get_ingredient_details(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetIngredientDetailsResponse>, ApiError> {
    let details = state
        .service
        .get_ingredient_details(ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientDetailsResponse { data: details }))
}
