use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::planning::{
    entities::{MealSlot, MealType, PlanView},
    reconciler::{MissingIngredient, StockDeduction},
};

#[derive(Debug, Clone)]
pub struct AssignMealInput {
    pub day: NaiveDate,
    pub meal_type: MealType,
    pub recipe_id: Uuid,
    /// Falls back to the configured default when `None`.
    pub auto_update: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanDay {
    pub day: NaiveDate,
    /// Sorted breakfast, lunch, dinner. Empty meals are absent.
    pub slots: Vec<MealSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub view: PlanView,
    pub days: Vec<PlanDay>,
}

/// Result of saving a slot. `coefficient` is `None` when stock was left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanningOutcome {
    pub slot: MealSlot,
    pub coefficient: Option<f64>,
    pub deductions: Vec<StockDeduction>,
    pub missing: Vec<MissingIngredient>,
}

impl PlanningOutcome {
    pub fn saved_only(slot: MealSlot) -> Self {
        Self {
            slot,
            coefficient: None,
            deductions: vec![],
            missing: vec![],
        }
    }
}
