use crate::application::http::profile::validators::UpdateProfileValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::profile::{
    entities::{Profile, ProfileType},
    ports::ProfileService,
    value_objects::UpdateProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    put,
    path = "/{profile_type}/{profile_id}",
    tag = "profile",
    summary = "Update profile",
    description = "Changes the name and/or rules of a profile. Omitted fields are kept.",
    params(
        ("profile_type" = ProfileType, Path, description = "Profile type"),
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 404, description = "Profile not found")
    ),
    request_body = UpdateProfileValidator
)]
pub async fn update_profile(
    Path((profile_type, profile_id)): Path<(String, Uuid)>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let profile_type: ProfileType = profile_type.parse()?;

    let profile = state
        .service
        .update_profile(UpdateProfileInput {
            profile_type,
            profile_id,
            name: payload.name,
            rules: payload.rules,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse { data: profile }))
}
