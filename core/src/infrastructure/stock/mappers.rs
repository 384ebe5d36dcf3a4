use sea_orm::ActiveValue::Set;

use crate::{domain::stock::entities::StockItem, entity::stock_items};

impl From<&stock_items::Model> for StockItem {
    fn from(model: &stock_items::Model) -> Self {
        Self {
            id: model.id,
            household_id: model.household_id,
            name: model.name.clone(),
            quantity: model.quantity,
            unit: model.unit.clone(),
            expiration_date: model.expiration_date,
            added_at: model.added_at.to_utc(),
            version: model.version,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<stock_items::Model> for StockItem {
    fn from(model: stock_items::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&StockItem> for stock_items::ActiveModel {
    fn from(item: &StockItem) -> Self {
        Self {
            id: Set(item.id),
            household_id: Set(item.household_id),
            name: Set(item.name.clone()),
            quantity: Set(item.quantity),
            unit: Set(item.unit.clone()),
            expiration_date: Set(item.expiration_date),
            added_at: Set(item.added_at.fixed_offset()),
            version: Set(item.version),
            created_at: Set(item.created_at.fixed_offset()),
            updated_at: Set(item.updated_at.fixed_offset()),
        }
    }
}
