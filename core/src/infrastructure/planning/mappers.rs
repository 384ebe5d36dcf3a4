use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::{
    domain::planning::entities::{MealSlot, MealType},
    entity::meal_slots,
};

impl TryFrom<meal_slots::Model> for MealSlot {
    type Error = String;

    fn try_from(model: meal_slots::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            household_id: model.household_id,
            day: model.day,
            meal_type: model.meal_type.parse::<MealType>()?,
            recipe_id: model.recipe_id,
            recipe_name: model.recipe_name,
            image: model.image,
            stock_applied: model.stock_applied,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

/// Rows with an unknown meal type are dropped.
pub fn to_slots(models: Vec<meal_slots::Model>) -> Vec<MealSlot> {
    models
        .into_iter()
        .filter_map(|model| {
            let id = model.id;
            MealSlot::try_from(model)
                .map_err(|e| warn!(slot_id = %id, "Skipping meal slot: {}", e))
                .ok()
        })
        .collect()
}

impl From<&MealSlot> for meal_slots::ActiveModel {
    fn from(slot: &MealSlot) -> Self {
        Self {
            id: Set(slot.id),
            household_id: Set(slot.household_id),
            day: Set(slot.day),
            meal_type: Set(slot.meal_type.as_str().to_string()),
            recipe_id: Set(slot.recipe_id),
            recipe_name: Set(slot.recipe_name.clone()),
            image: Set(slot.image.clone()),
            stock_applied: Set(slot.stock_applied),
            created_at: Set(slot.created_at.fixed_offset()),
            updated_at: Set(slot.updated_at.fixed_offset()),
        }
    }
}
