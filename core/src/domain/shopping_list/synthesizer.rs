//! Turns reconciliation shortfalls into shopping-list rows.
//!
//! One row per missing entry, never merged with what is already on the list: planning the same
//! meal twice puts the same ingredients on the list twice.

use uuid::Uuid;

use crate::domain::{
    planning::reconciler::MissingIngredient,
    shopping_list::entities::{ShoppingListItem, ShoppingListItemConfig},
};

pub fn synthesize(household_id: Uuid, missing: &[MissingIngredient]) -> Vec<ShoppingListItem> {
    missing
        .iter()
        .map(|entry| {
            ShoppingListItem::new(ShoppingListItemConfig {
                household_id,
                name: entry.name.clone(),
                quantity: entry.quantity,
                unit: entry.unit.clone(),
                price: entry.price,
            })
        })
        .collect()
}
