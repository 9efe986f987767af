use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use menuplan_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "List ingredients",
    responses(
        (status = 200, body = GetIngredientsResponse)
    ),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .get_ingredients()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientsResponse { data: ingredients }))
}
