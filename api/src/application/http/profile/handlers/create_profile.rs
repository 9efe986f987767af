use crate::application::http::profile::validators::CreateProfileValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuplan_core::domain::profile::{
    entities::{Profile, ProfileType},
    ports::ProfileService,
    value_objects::CreateProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    post,
    path = "/{profile_type}",
    tag = "profile",
    summary = "Create profile",
    description = "Creates a service or pathology profile with its dietary rules.",
    params(
        ("profile_type" = ProfileType, Path, description = "Profile type"),
    ),
    responses(
        (status = 201, body = CreateProfileResponse),
        (status = 422, description = "Invalid payload")
    ),
    request_body = CreateProfileValidator
)]
pub async fn create_profile(
    Path(profile_type): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProfileValidator>,
) -> Result<Response<CreateProfileResponse>, ApiError> {
    let profile_type: ProfileType = profile_type.parse()?;

    let profile = state
        .service
        .create_profile(CreateProfileInput {
            profile_type,
            name: payload.name,
            rules: payload.rules,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateProfileResponse { data: profile }))
}
