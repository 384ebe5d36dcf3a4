use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    shopping_list::entities::ShoppingListItem, stock::entities::StockItem,
};

#[derive(Debug, Clone)]
pub struct CreateShoppingListItemInput {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub items: Vec<ShoppingListItem>,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidatedShoppingList {
    /// Stock rows created from the purchased entries.
    pub stocked: Vec<StockItem>,
}
