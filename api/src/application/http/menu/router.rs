use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::generate_menu::{__path_generate_menu, generate_menu};
use super::handlers::generate_suggestions::{__path_generate_suggestions, generate_suggestions};
use super::handlers::get_menu::{__path_get_menu, get_menu};
use super::handlers::list_menus::{__path_list_menus, list_menus};
use super::handlers::set_menu::{__path_set_menu, set_menu};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_menus, get_menu, set_menu, generate_menu, generate_suggestions))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menus", state.args.server.root_path),
            get(list_menus),
        )
        .route(
            &format!("{}/menus/{{date}}", state.args.server.root_path),
            get(get_menu),
        )
        .route(
            &format!("{}/menus/{{date}}", state.args.server.root_path),
            put(set_menu),
        )
        .route(
            &format!("{}/menus/{{date}}/generate", state.args.server.root_path),
            post(generate_menu),
        )
        .route(
            &format!("{}/menus/{{date}}/suggestions", state.args.server.root_path),
            post(generate_suggestions),
        )
}
