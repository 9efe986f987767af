use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_profile::{__path_create_profile, create_profile};
use super::handlers::delete_profile::{__path_delete_profile, delete_profile};
use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::get_profiles::{__path_get_profiles, get_profiles};
use super::handlers::update_profile::{__path_update_profile, update_profile};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_profiles, get_profile, create_profile, update_profile, delete_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profiles/{{profile_type}}", state.args.server.root_path),
            get(get_profiles),
        )
        .route(
            &format!("{}/profiles/{{profile_type}}", state.args.server.root_path),
            post(create_profile),
        )
        .route(
            &format!(
                "{}/profiles/{{profile_type}}/{{profile_id}}",
                state.args.server.root_path
            ),
            get(get_profile),
        )
        .route(
            &format!(
                "{}/profiles/{{profile_type}}/{{profile_id}}",
                state.args.server.root_path
            ),
            put(update_profile),
        )
        .route(
            &format!(
                "{}/profiles/{{profile_type}}/{{profile_id}}",
                state.args.server.root_path
            ),
            delete(delete_profile),
        )
}
