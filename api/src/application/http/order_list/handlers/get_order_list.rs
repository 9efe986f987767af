use crate::application::http::menu::validators::DateRangeQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use menuplan_core::domain::{
    menu::entities::DateRange,
    order_list::{entities::OrderListEntry, ports::OrderListService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetOrderListResponse {
    pub data: Vec<OrderListEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "order-list",
    summary = "Get order list",
    description = "Scheduled menus between `from` and `to` with profile names resolved. Deleted profiles show as \"Unknown\".",
    params(
        ("from" = String, Query, description = "First date, YYYY-MM-DD"),
        ("to" = String, Query, description = "Last date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = GetOrderListResponse),
        (status = 400, description = "Invalid range")
    ),
)]
pub async fn get_order_list(
    Query(query): Query<DateRangeQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetOrderListResponse>, ApiError> {
    let range = DateRange::try_from(query)?;

    let entries = state
        .service
        .get_order_list(range)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetOrderListResponse { data: entries }))
}
