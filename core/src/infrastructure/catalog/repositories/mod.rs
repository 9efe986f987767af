pub mod catalog_item_repository;
