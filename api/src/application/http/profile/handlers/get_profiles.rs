use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::profile::{
    entities::{Profile, ProfileType},
    ports::ProfileService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfilesResponse {
    pub data: Vec<Profile>,
}

#[utoipa::path(
    get,
    path = "/{profile_type}",
    tag = "profile",
    summary = "List profiles",
    description = "Lists every profile of the given type (service or pathology).",
    params(
        ("profile_type" = ProfileType, Path, description = "Profile type"),
    ),
    responses(
        (status = 200, body = GetProfilesResponse),
        (status = 400, description = "Unknown profile type")
    ),
)]
pub async fn get_profiles(
    Path(profile_type): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetProfilesResponse>, ApiError> {
    let profile_type: ProfileType = profile_type.parse()?;

    let profiles = state
        .service
        .get_profiles(profile_type)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfilesResponse { data: profiles }))
}
