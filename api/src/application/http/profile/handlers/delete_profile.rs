use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::profile::{
    entities::ProfileType, ports::ProfileService, value_objects::DeleteProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProfileResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{profile_type}/{profile_id}",
    tag = "profile",
    summary = "Delete profile",
    description = "Deletes a profile. Menus that reference it are kept.",
    params(
        ("profile_type" = ProfileType, Path, description = "Profile type"),
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
    responses(
        (status = 200, body = DeleteProfileResponse),
        (status = 404, description = "Profile not found")
    ),
)]
pub async fn delete_profile(
    Path((profile_type, profile_id)): Path<(String, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProfileResponse>, ApiError> {
    let profile_type: ProfileType = profile_type.parse()?;

    state
        .service
        .delete_profile(DeleteProfileInput {
            profile_type,
            profile_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProfileResponse {
        message: "Profile deleted successfully".to_string(),
    }))
}
