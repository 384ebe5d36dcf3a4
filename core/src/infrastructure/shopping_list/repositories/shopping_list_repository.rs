use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        shopping_list::{entities::ShoppingListItem, ports::ShoppingListRepository},
        stock::entities::{StockItem, StockItemConfig},
    },
    entity::{
        shopping_list_items::{ActiveModel, Column, Entity},
        stock_items,
    },
    infrastructure::db::transaction::{begin, commit},
};

#[derive(Debug, Clone)]
pub struct PostgresShoppingListRepository {
    pub db: DatabaseConnection,
}

impl PostgresShoppingListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ShoppingListRepository for PostgresShoppingListRepository {
    async fn list_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<ShoppingListItem>, CoreError> {
        let items = Entity::find()
            .filter(Column::HouseholdId.eq(household_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list shopping list items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(items.into_iter().map(ShoppingListItem::from).collect())
    }

    async fn create_many(
        &self,
        items: Vec<ShoppingListItem>,
    ) -> Result<Vec<ShoppingListItem>, CoreError> {
        if items.is_empty() {
            return Ok(items);
        }

        Entity::insert_many(items.iter().map(ActiveModel::from))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create shopping list items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(items)
    }

    async fn delete(&self, item_id: Uuid, household_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .filter(Column::HouseholdId.eq(household_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping list item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn clear(&self, household_id: Uuid) -> Result<u64, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::HouseholdId.eq(household_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to clear shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn move_to_stock(
        &self,
        household_id: Uuid,
        item_ids: Vec<Uuid>,
    ) -> Result<Vec<StockItem>, CoreError> {
        let txn = begin(&self.db).await?;

        let selected = Entity::find()
            .filter(Column::HouseholdId.eq(household_id))
            .filter(Column::Id.is_in(item_ids))
            .order_by_asc(Column::CreatedAt)
            .all(&txn)
            .await
            .map_err(|e| {
                error!("Failed to load selected shopping list items: {}", e);
                CoreError::InternalServerError
            })?;

        if selected.is_empty() {
            return Ok(vec![]);
        }

        let stocked: Vec<StockItem> = selected
            .iter()
            .map(|item| {
                StockItem::new(StockItemConfig {
                    household_id,
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit: item.unit.clone(),
                    expiration_date: None,
                })
            })
            .collect();

        stock_items::Entity::insert_many(stocked.iter().map(stock_items::ActiveModel::from))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to add purchased items to stock: {}", e);
                CoreError::InternalServerError
            })?;

        Entity::delete_many()
            .filter(Column::HouseholdId.eq(household_id))
            .filter(Column::Id.is_in(selected.iter().map(|item| item.id)))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to remove purchased items from the list: {}", e);
                CoreError::InternalServerError
            })?;

        commit(txn).await?;

        Ok(stocked)
    }
}
