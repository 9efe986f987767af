pub mod catalog;
pub mod health;
pub mod ingredient;
pub mod menu;
pub mod order_list;
pub mod profile;
pub mod server;
