use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    planning::reconciler::MissingIngredient,
    shopping_list::{
        entities::ShoppingListItem,
        value_objects::{CreateShoppingListItemInput, ShoppingList, ValidatedShoppingList},
    },
    stock::entities::StockItem,
};

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingListRepository: Send + Sync {
    fn list_by_household(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ShoppingListItem>, CoreError>> + Send;

    fn create_many(
        &self,
        items: Vec<ShoppingListItem>,
    ) -> impl Future<Output = Result<Vec<ShoppingListItem>, CoreError>> + Send;

    /// Returns whether a row was removed.
    fn delete(
        &self,
        item_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn clear(&self, household_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Moves the selected rows into stock in one transaction. Ids that are not on the
    /// household's list are ignored.
    fn move_to_stock(
        &self,
        household_id: Uuid,
        item_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<StockItem>, CoreError>> + Send;
}

pub trait ShoppingListService: Send + Sync {
    fn get_shopping_list(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn add_shopping_list_item(
        &self,
        household_id: Uuid,
        input: CreateShoppingListItemInput,
    ) -> impl Future<Output = Result<ShoppingListItem, CoreError>> + Send;

    /// Appends one row per entry, without merging with rows already on the list.
    fn append_missing(
        &self,
        household_id: Uuid,
        missing: Vec<MissingIngredient>,
    ) -> impl Future<Output = Result<Vec<ShoppingListItem>, CoreError>> + Send;

    fn delete_shopping_list_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_shopping_list(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn validate_shopping_list(
        &self,
        household_id: Uuid,
        item_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<ValidatedShoppingList, CoreError>> + Send;
}
