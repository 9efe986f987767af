use crate::application::http::catalog::validators::CreateCatalogItemValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use menuplan_core::domain::catalog::{
    entities::CatalogItem, ports::CatalogService, value_objects::CreateCatalogItemInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCatalogItemResponse {
    pub data: CatalogItem,
}

#[utoipa::path(
    post,
    path = "",
    tag = "catalog",
    summary = "Create catalog item",
    description = "Adds an item to the catalog. Codes are unique.",
    responses(
        (status = 201, body = CreateCatalogItemResponse),
        (status = 409, description = "Code already exists")
    ),
    request_body = CreateCatalogItemValidator
)]
pub async fn create_catalog_item(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCatalogItemValidator>,
) -> Result<Response<CreateCatalogItemResponse>, ApiError> {
    let item = state
        .service
        .create_catalog_item(CreateCatalogItemInput {
            code: payload.code,
            description: payload.description,
            unit: payload.unit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCatalogItemResponse { data: item }))
}
