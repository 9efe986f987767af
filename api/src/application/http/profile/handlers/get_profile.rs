use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::profile::{
    entities::{Profile, ProfileType},
    ports::ProfileService,
    value_objects::GetProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    get,
    path = "/{profile_type}/{profile_id}",
    tag = "profile",
    summary = "Get profile",
    params(
        ("profile_type" = ProfileType, Path, description = "Profile type"),
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 404, description = "Profile not found")
    ),
)]
pub async fn get_profile(
    Path((profile_type, profile_id)): Path<(String, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile_type: ProfileType = profile_type.parse()?;

    let profile = state
        .service
        .get_profile(GetProfileInput {
            profile_type,
            profile_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
