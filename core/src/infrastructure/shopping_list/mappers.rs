use sea_orm::ActiveValue::Set;

use crate::{domain::shopping_list::entities::ShoppingListItem, entity::shopping_list_items};

impl From<&shopping_list_items::Model> for ShoppingListItem {
    fn from(model: &shopping_list_items::Model) -> Self {
        Self {
            id: model.id,
            household_id: model.household_id,
            name: model.name.clone(),
            quantity: model.quantity,
            unit: model.unit.clone(),
            price: model.price,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<shopping_list_items::Model> for ShoppingListItem {
    fn from(model: shopping_list_items::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&ShoppingListItem> for shopping_list_items::ActiveModel {
    fn from(item: &ShoppingListItem) -> Self {
        Self {
            id: Set(item.id),
            household_id: Set(item.household_id),
            name: Set(item.name.clone()),
            quantity: Set(item.quantity),
            unit: Set(item.unit.clone()),
            price: Set(item.price),
            created_at: Set(item.created_at.fixed_offset()),
        }
    }
}
