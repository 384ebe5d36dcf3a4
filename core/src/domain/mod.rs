pub mod common;
pub mod family;
pub mod health;
pub mod household;
pub mod planning;
pub mod proposition;
pub mod recipe;
pub mod shopping_list;
pub mod stock;
