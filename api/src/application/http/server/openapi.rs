use utoipa::OpenApi;

use crate::application::http::{
    catalog::router::CatalogApiDoc, health::router::HealthApiDoc,
    ingredient::router::IngredientApiDoc, menu::router::MenuApiDoc,
    order_list::router::OrderListApiDoc, profile::router::ProfileApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menuplan API"
    ),
    nest(
        (path = "/profiles", api = ProfileApiDoc),
        (path = "/catalog-items", api = CatalogApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/menus", api = MenuApiDoc),
        (path = "/order-list", api = OrderListApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
