use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_catalog_item::{__path_create_catalog_item, create_catalog_item};
use super::handlers::delete_catalog_item::{__path_delete_catalog_item, delete_catalog_item};
use super::handlers::get_catalog_item::{__path_get_catalog_item, get_catalog_item};
use super::handlers::get_catalog_items::{__path_get_catalog_items, get_catalog_items};
use super::handlers::update_catalog_item::{__path_update_catalog_item, update_catalog_item};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_catalog_items,
    get_catalog_item,
    create_catalog_item,
    update_catalog_item,
    delete_catalog_item
))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/catalog-items", state.args.server.root_path),
            get(get_catalog_items),
        )
        .route(
            &format!("{}/catalog-items", state.args.server.root_path),
            post(create_catalog_item),
        )
        .route(
            &format!("{}/catalog-items/{{code}}", state.args.server.root_path),
            get(get_catalog_item),
        )
        .route(
            &format!("{}/catalog-items/{{code}}", state.args.server.root_path),
            put(update_catalog_item),
        )
        .route(
            &format!("{}/catalog-items/{{code}}", state.args.server.root_path),
            delete(delete_catalog_item),
        )
}
