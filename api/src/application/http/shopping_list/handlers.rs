pub mod add_shopping_list_item;
pub mod append_missing;
pub mod clear_shopping_list;
pub mod delete_shopping_list_item;
pub mod get_shopping_list;
pub mod send_shopping_list;
pub mod validate_shopping_list;
