use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        stock::{entities::StockItem, ports::StockRepository},
    },
    entity::stock_items::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresStockRepository {
    pub db: DatabaseConnection,
}

impl PostgresStockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StockRepository for PostgresStockRepository {
    async fn list_by_household(&self, household_id: Uuid) -> Result<Vec<StockItem>, CoreError> {
        let items = Entity::find()
            .filter(Column::HouseholdId.eq(household_id))
            .order_by_asc(Column::AddedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list stock items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(items.into_iter().map(StockItem::from).collect())
    }

    async fn get_by_id(
        &self,
        item_id: Uuid,
        household_id: Uuid,
    ) -> Result<Option<StockItem>, CoreError> {
        let item = Entity::find_by_id(item_id)
            .filter(Column::HouseholdId.eq(household_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get stock item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(item.map(StockItem::from))
    }

    async fn create(&self, item: StockItem) -> Result<StockItem, CoreError> {
        let created = Entity::insert(ActiveModel::from(&item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create stock item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(StockItem::from(created))
    }

    async fn update(&self, item: StockItem) -> Result<StockItem, CoreError> {
        let mut active_model = ActiveModel::from(&item);
        active_model.version = Set(item.version + 1);

        let updated = Entity::update(active_model)
            .filter(Column::HouseholdId.eq(item.household_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update stock item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(StockItem::from(updated))
    }

    async fn delete(&self, item_id: Uuid, household_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .filter(Column::HouseholdId.eq(household_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete stock item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
