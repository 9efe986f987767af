pub mod catalog;
pub mod db;
pub mod ingredient;
pub mod llm;
pub mod menu;
pub mod profile;
pub mod storage;
