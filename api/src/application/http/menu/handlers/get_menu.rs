use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use menuplan_core::domain::menu::{entities::ScheduledMenu, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenuResponse {
    pub data: ScheduledMenu,
}

#[utoipa::path(
    get,
    path = "/{date}",
    tag = "menu",
    summary = "Get scheduled menu",
    params(
        ("date" = String, Path, description = "Calendar date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = GetMenuResponse),
        (status = 404, description = "No menu scheduled for the date")
    ),
)]
pub async fn get_menu(
    Path(date): Path<NaiveDate>,
    State(state): State<AppState>,
) -> Result<Response<GetMenuResponse>, ApiError> {
    let menu = state
        .service
        .get_menu(date)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("No menu scheduled for {date}")))?;

    Ok(Response::OK(GetMenuResponse { data: menu }))
}
