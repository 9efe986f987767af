pub mod create_catalog_item;
pub mod delete_catalog_item;
pub mod get_catalog_item;
pub mod get_catalog_items;
pub mod update_catalog_item;
