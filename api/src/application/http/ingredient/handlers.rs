pub mod create_ingredient;
pub mod delete_ingredient;
pub mod get_ingredient;
pub mod get_ingredient_details;
pub mod get_ingredients;
pub mod update_ingredient;
