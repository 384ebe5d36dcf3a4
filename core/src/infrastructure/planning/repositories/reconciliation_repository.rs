use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, sea_query::Expr};
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        planning::{entities::MealSlot, ports::ReconciliationRepository, reconciler::StockDeduction},
        shopping_list::entities::ShoppingListItem,
    },
    entity::{meal_slots, shopping_list_items, stock_items},
    infrastructure::db::transaction::{begin, commit},
};

#[derive(Debug, Clone)]
pub struct PostgresReconciliationRepository {
    pub db: DatabaseConnection,
}

impl PostgresReconciliationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReconciliationRepository for PostgresReconciliationRepository {
    async fn apply(
        &self,
        household_id: Uuid,
        slot_id: Uuid,
        deductions: Vec<StockDeduction>,
        missing: Vec<ShoppingListItem>,
    ) -> Result<MealSlot, CoreError> {
        let (now, _) = generate_timestamp();
        let txn = begin(&self.db).await?;

        for deduction in &deductions {
            let result = stock_items::Entity::update_many()
                .col_expr(
                    stock_items::Column::Quantity,
                    Expr::value(deduction.new_quantity),
                )
                .col_expr(
                    stock_items::Column::Version,
                    Expr::col(stock_items::Column::Version).add(1),
                )
                .col_expr(stock_items::Column::UpdatedAt, Expr::value(now.fixed_offset()))
                .filter(stock_items::Column::Id.eq(deduction.stock_item_id))
                .filter(stock_items::Column::HouseholdId.eq(household_id))
                .filter(stock_items::Column::Version.eq(deduction.expected_version))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to deduct stock: {}", e);
                    CoreError::InternalServerError
                })?;

            if result.rows_affected == 0 {
                warn!(
                    stock_item_id = %deduction.stock_item_id,
                    expected_version = deduction.expected_version,
                    "Stock item changed since it was read"
                );
                return Err(CoreError::StaleStock);
            }
        }

        if !missing.is_empty() {
            shopping_list_items::Entity::insert_many(
                missing.iter().map(shopping_list_items::ActiveModel::from),
            )
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to add missing ingredients to the shopping list: {}", e);
                CoreError::InternalServerError
            })?;
        }

        meal_slots::Entity::update_many()
            .col_expr(meal_slots::Column::StockApplied, Expr::value(true))
            .col_expr(meal_slots::Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(meal_slots::Column::Id.eq(slot_id))
            .filter(meal_slots::Column::HouseholdId.eq(household_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to mark meal slot as applied: {}", e);
                CoreError::InternalServerError
            })?;

        let slot = meal_slots::Entity::find_by_id(slot_id)
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to reload meal slot: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        commit(txn).await?;

        MealSlot::try_from(slot).map_err(|e| {
            error!("Meal slot is unreadable: {}", e);
            CoreError::InternalServerError
        })
    }
}
