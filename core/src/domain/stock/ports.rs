use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stock::{
        entities::StockItem,
        value_objects::{
            CreateStockItemInput, ExpirationReport, StockItemView, UpdateStockItemInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait StockRepository: Send + Sync {
    fn list_by_household(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<StockItem>, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Option<StockItem>, CoreError>> + Send;

    fn create(&self, item: StockItem)
    -> impl Future<Output = Result<StockItem, CoreError>> + Send;

    /// Writes every field and bumps the version.
    fn update(&self, item: StockItem)
    -> impl Future<Output = Result<StockItem, CoreError>> + Send;

    fn delete(
        &self,
        item_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait StockService: Send + Sync {
    fn get_stock(
        &self,
        household_id: Uuid,
        today: NaiveDate,
    ) -> impl Future<Output = Result<Vec<StockItemView>, CoreError>> + Send;

    fn get_stock_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
        today: NaiveDate,
    ) -> impl Future<Output = Result<StockItemView, CoreError>> + Send;

    fn create_stock_item(
        &self,
        household_id: Uuid,
        input: CreateStockItemInput,
    ) -> impl Future<Output = Result<StockItem, CoreError>> + Send;

    fn update_stock_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
        input: UpdateStockItemInput,
    ) -> impl Future<Output = Result<StockItem, CoreError>> + Send;

    fn delete_stock_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Deletes expired items and reports the ones expiring within a week.
    fn check_expirations(
        &self,
        household_id: Uuid,
        today: NaiveDate,
    ) -> impl Future<Output = Result<ExpirationReport, CoreError>> + Send;
}
