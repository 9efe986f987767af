use crate::application::http::menu::validators::SetMenuValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use menuplan_core::domain::menu::{
    entities::ScheduledMenu, ports::MenuService, value_objects::SetMenuInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SetMenuResponse {
    pub data: ScheduledMenu,
}

#[utoipa::path(
    put,
    path = "/{date}",
    tag = "menu",
    summary = "Set scheduled menu",
    description = "Stores a menu for the date, replacing any menu already scheduled.",
    params(
        ("date" = String, Path, description = "Calendar date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = SetMenuResponse),
        (status = 422, description = "Invalid payload")
    ),
    request_body = SetMenuValidator
)]
pub async fn set_menu(
    Path(date): Path<NaiveDate>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SetMenuValidator>,
) -> Result<Response<SetMenuResponse>, ApiError> {
    let menu = state
        .service
        .set_menu(SetMenuInput {
            date,
            service_profile_id: payload.service_profile_id,
            pathology_profile_id: payload.pathology_profile_id,
            menu_text: payload.menu_text,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SetMenuResponse { data: menu }))
}
