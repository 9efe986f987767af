use crate::application::http::menu::validators::{GenerateMenuValidator, parse_profile_id};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use menuplan_core::domain::menu::{
    entities::ScheduledMenu, ports::MenuService, value_objects::GenerateMenuInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateMenuResponse {
    pub data: ScheduledMenu,
}

#[utoipa::path(
    post,
    path = "/{date}/generate",
    tag = "menu",
    summary = "Generate menu",
    description = "Generates a daily menu from a service profile and a pathology profile and schedules it on the date. Nothing is stored when generation fails.",
    params(
        ("date" = String, Path, description = "Calendar date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = GenerateMenuResponse),
        (status = 400, description = "Missing profile selection"),
        (status = 404, description = "Profile not found"),
        (status = 502, description = "Generation failed")
    ),
    request_body = GenerateMenuValidator
)]
pub async fn generate_menu(
    Path(date): Path<NaiveDate>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMenuValidator>,
) -> Result<Response<GenerateMenuResponse>, ApiError> {
    let service_profile_id = parse_profile_id("service_profile_id", payload.service_profile_id)?;
    let pathology_profile_id =
        parse_profile_id("pathology_profile_id", payload.pathology_profile_id)?;

    let menu = state
        .service
        .generate_menu(GenerateMenuInput {
            date,
            service_profile_id,
            pathology_profile_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateMenuResponse { data: menu }))
}
