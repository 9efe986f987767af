use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use menuplan_core::domain::{generation::SuggestionSet, menu::ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateSuggestionsResponse {
    pub data: SuggestionSet,
}

#[utoipa::path(
    post,
    path = "/{date}/suggestions",
    tag = "menu",
    summary = "Suggest alternatives",
    description = "Generates alternative-food suggestions for the menu scheduled on the date. Suggestions are not stored.",
    params(
        ("date" = String, Path, description = "Calendar date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = GenerateSuggestionsResponse),
        (status = 404, description = "No menu scheduled for the date"),
        (status = 502, description = "Generation failed")
    ),
)]
pub async fn generate_suggestions(
    Path(date): Path<NaiveDate>,
    State(state): State<AppState>,
) -> Result<Response<GenerateSuggestionsResponse>, ApiError> {
    let suggestions = state
        .service
        .generate_suggestions(date)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateSuggestionsResponse { data: suggestions }))
}
