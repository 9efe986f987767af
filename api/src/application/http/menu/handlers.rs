pub mod generate_menu;
pub mod generate_suggestions;
pub mod get_menu;
pub mod list_menus;
pub mod set_menu;
