use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    planning::{
        entities::{MealSlot, MealType, PlanView},
        reconciler::StockDeduction,
        value_objects::{AssignMealInput, MealPlan, PlanningOutcome},
    },
    shopping_list::entities::ShoppingListItem,
};

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanRepository: Send + Sync {
    /// Slots with `from <= day <= to`.
    fn list_range(
        &self,
        household_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = Result<Vec<MealSlot>, CoreError>> + Send;

    /// Slots in the range whose recipe has not been reconciled against stock.
    fn list_pending(
        &self,
        household_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = Result<Vec<MealSlot>, CoreError>> + Send;

    /// Inserts the slot or replaces the recipe of the existing (day, meal type) slot, which
    /// then counts as not reconciled.
    fn upsert(&self, slot: MealSlot) -> impl Future<Output = Result<MealSlot, CoreError>> + Send;

    fn delete(
        &self,
        household_id: Uuid,
        day: NaiveDate,
        meal_type: MealType,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReconciliationRepository: Send + Sync {
    /// Writes deductions, shopping-list rows and the slot's applied flag in one transaction.
    ///
    /// A deduction whose row no longer carries `expected_version` rolls everything back with
    /// [`CoreError::StaleStock`].
    fn apply(
        &self,
        household_id: Uuid,
        slot_id: Uuid,
        deductions: Vec<StockDeduction>,
        missing: Vec<ShoppingListItem>,
    ) -> impl Future<Output = Result<MealSlot, CoreError>> + Send;
}

pub trait PlanningService: Send + Sync {
    fn get_plan(
        &self,
        household_id: Uuid,
        view: PlanView,
        reference: NaiveDate,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn assign_meal(
        &self,
        household_id: Uuid,
        input: AssignMealInput,
    ) -> impl Future<Output = Result<PlanningOutcome, CoreError>> + Send;

    fn clear_meal(
        &self,
        household_id: Uuid,
        day: NaiveDate,
        meal_type: MealType,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn sync_plan(
        &self,
        household_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = Result<Vec<PlanningOutcome>, CoreError>> + Send;
}
