use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::catalog::{entities::CatalogItem, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCatalogItemResponse {
    pub data: CatalogItem,
}

#[utoipa::path(
    get,
    path = "/{code}",
    tag = "catalog",
    summary = "Get catalog item",
    params(
        ("code" = String, Path, description = "Catalog item code"),
    ),
    responses(
        (status = 200, body = GetCatalogItemResponse),
        (status = 404, description = "Catalog item not found")
    ),
)]
pub async fn get_catalog_item(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetCatalogItemResponse>, ApiError> {
    let item = state
        .service
        .get_catalog_item(code)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCatalogItemResponse { data: item }))
}
