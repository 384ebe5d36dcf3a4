pub mod family;
pub mod health;
pub mod meal_plan;
pub mod proposition;
pub mod query_extractor;
pub mod query_params;
pub mod recipe;
pub mod server;
pub mod shopping_list;
pub mod stock;
