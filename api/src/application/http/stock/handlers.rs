pub mod check_expirations;
pub mod create_stock_item;
pub mod delete_stock_item;
pub mod get_stock;
pub mod get_stock_item;
pub mod update_stock_item;
