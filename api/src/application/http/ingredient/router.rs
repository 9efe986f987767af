use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_ingredient::{__path_create_ingredient, create_ingredient};
use super::handlers::delete_ingredient::{__path_delete_ingredient, delete_ingredient};
use super::handlers::get_ingredient::{__path_get_ingredient, get_ingredient};
use super::handlers::get_ingredient_details::{
    __path_get_ingredient_details, get_ingredient_details,
};
use super::handlers::get_ingredients::{__path_get_ingredients, get_ingredients};
use super::handlers::update_ingredient::{__path_update_ingredient, update_ingredient};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_ingredients,
    get_ingredient,
    get_ingredient_details,
    create_ingredient,
    update_ingredient,
    delete_ingredient
))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients", state.args.server.root_path),
            get(get_ingredients),
        )
        .route(
            &format!("{}/ingredients", state.args.server.root_path),
            post(create_ingredient),
        )
        .route(
            &format!("{}/ingredients/{{ingredient_id}}", state.args.server.root_path),
            get(get_ingredient),
        )
        .route(
            &format!("{}/ingredients/{{ingredient_id}}", state.args.server.root_path),
            put(update_ingredient),
        )
        .route(
            &format!("{}/ingredients/{{ingredient_id}}", state.args.server.root_path),
            delete(delete_ingredient),
        )
        .route(
            &format!(
                "{}/ingredients/{{ingredient_id}}/details",
                state.args.server.root_path
            ),
            get(get_ingredient_details),
        )
}
