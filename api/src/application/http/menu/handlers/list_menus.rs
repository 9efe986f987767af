use crate::application::http::menu::validators::DateRangeQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use menuplan_core::domain::menu::{
    entities::{DateRange, ScheduledMenu},
    ports::MenuService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListMenusResponse {
    pub data: Vec<ScheduledMenu>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "menu",
    summary = "List scheduled menus",
    description = "Menus between `from` and `to` (both inclusive), sorted by date.",
    params(
        ("from" = String, Query, description = "First date, YYYY-MM-DD"),
        ("to" = String, Query, description = "Last date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = ListMenusResponse),
        (status = 400, description = "Invalid range")
    ),
)]
pub async fn list_menus(
    Query(query): Query<DateRangeQuery>,
    State(state): State<AppState>,
) -> Result<Response<ListMenusResponse>, ApiError> {
    let range = DateRange::try_from(query)?;

    let menus = state
        .service
        .list_menus(range)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListMenusResponse { data: menus }))
}
