use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_order_list::{__path_get_order_list, get_order_list};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_order_list))]
pub struct OrderListApiDoc;

pub fn order_list_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/order-list", state.args.server.root_path),
        get(get_order_list),
    )
}
