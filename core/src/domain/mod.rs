pub mod catalog;
pub mod common;
pub mod generation;
pub mod ingredient;
pub mod menu;
pub mod order_list;
pub mod profile;
pub mod storage;
