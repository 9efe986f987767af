use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use menuplan_core::domain::catalog::{entities::CatalogItem, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCatalogItemsResponse {
    pub data: Vec<CatalogItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "catalog",
    summary = "List catalog items",
    responses(
        (status = 200, body = GetCatalogItemsResponse)
    ),
)]
pub async fn get_catalog_items(
    State(state): State<AppState>,
) -> Result<Response<GetCatalogItemsResponse>, ApiError> {
    let items = state
        .service
        .get_catalog_items()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCatalogItemsResponse { data: items }))
}
