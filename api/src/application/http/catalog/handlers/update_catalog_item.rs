use crate::application::http::catalog::validators::UpdateCatalogItemValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::catalog::{
    entities::CatalogItem, ports::CatalogService, value_objects::UpdateCatalogItemInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCatalogItemResponse {
    pub data: CatalogItem,
}

#[utoipa::path(
    put,
    path = "/{code}",
    tag = "catalog",
    summary = "Update catalog item",
    params(
        ("code" = String, Path, description = "Current catalog item code"),
    ),
    responses(
        (status = 200, body = UpdateCatalogItemResponse),
        (status = 404, description = "Catalog item not found"),
        (status = 409, description = "New code belongs to another item")
    ),
    request_body = UpdateCatalogItemValidator
)]
pub async fn update_catalog_item(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCatalogItemValidator>,
) -> Result<Response<UpdateCatalogItemResponse>, ApiError> {
    let item = state
        .service
        .update_catalog_item(UpdateCatalogItemInput {
            code,
            new_code: payload.code,
            description: payload.description,
            unit: payload.unit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateCatalogItemResponse { data: item }))
}
