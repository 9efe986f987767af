use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::catalog::ports::CatalogService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCatalogItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{code}",
    tag = "catalog",
    summary = "Delete catalog item",
    description = "Removes an item. Ingredient links to the code are left as they are.",
    params(
        ("code" = String, Path, description = "Catalog item code"),
    ),
    responses(
        (status = 200, body = DeleteCatalogItemResponse),
        (status = 404, description = "Catalog item not found")
    ),
)]
pub async fn delete_catalog_item(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCatalogItemResponse>, ApiError> {
    state
        .service
        .delete_catalog_item(code)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCatalogItemResponse {
        message: "Catalog item deleted successfully".to_string(),
    }))
}
