use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, round2, services::Service},
    family::ports::FamilyMemberRepository,
    health::ports::HealthCheckRepository,
    household::ports::HouseholdRepository,
    planning::{
        ports::{MealPlanRepository, ReconciliationRepository},
        reconciler::MissingIngredient,
    },
    proposition::ports::PropositionRepository,
    recipe::ports::RecipeRepository,
    shopping_list::{
        entities::{ShoppingListItem, ShoppingListItemConfig},
        ports::{ShoppingListRepository, ShoppingListService},
        synthesizer::synthesize,
        value_objects::{CreateShoppingListItemInput, ShoppingList, ValidatedShoppingList},
    },
    stock::ports::StockRepository,
};

pub fn total_cost(items: &[ShoppingListItem]) -> f64 {
    round2(items.iter().map(ShoppingListItem::cost).sum())
}

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> ShoppingListService
    for Service<HH, FM, RC, ST, SL, MP, RR, PR, HC>
where
    HH: HouseholdRepository,
    FM: FamilyMemberRepository,
    RC: RecipeRepository,
    ST: StockRepository,
    SL: ShoppingListRepository,
    MP: MealPlanRepository,
    RR: ReconciliationRepository,
    PR: PropositionRepository,
    HC: HealthCheckRepository,
{
    async fn get_shopping_list(&self, household_id: Uuid) -> Result<ShoppingList, CoreError> {
        let items = self
            .shopping_list_repository
            .list_by_household(household_id)
            .await?;
        let total_cost = total_cost(&items);

        Ok(ShoppingList { items, total_cost })
    }

    async fn add_shopping_list_item(
        &self,
        household_id: Uuid,
        input: CreateShoppingListItemInput,
    ) -> Result<ShoppingListItem, CoreError> {
        if input.name.trim().is_empty() || input.unit.trim().is_empty() {
            return Err(CoreError::Invalid("name and unit are required".to_string()));
        }
        if input.quantity <= 0.0 || input.price.is_some_and(|p| p < 0.0) {
            return Err(CoreError::Invalid(
                "quantity must be positive and price not negative".to_string(),
            ));
        }

        let item = ShoppingListItem::new(ShoppingListItemConfig {
            household_id,
            name: input.name,
            quantity: input.quantity,
            unit: input.unit,
            price: input.price.unwrap_or(0.0),
        });

        let mut created = self.shopping_list_repository.create_many(vec![item]).await?;
        created.pop().ok_or(CoreError::InternalServerError)
    }

    #[instrument(skip(self, missing), fields(household_id = %household_id, entries = missing.len()))]
    async fn append_missing(
        &self,
        household_id: Uuid,
        missing: Vec<MissingIngredient>,
    ) -> Result<Vec<ShoppingListItem>, CoreError> {
        let items = synthesize(household_id, &missing);
        if items.is_empty() {
            return Ok(items);
        }

        self.shopping_list_repository.create_many(items).await
    }

    async fn delete_shopping_list_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), CoreError> {
        if !self
            .shopping_list_repository
            .delete(item_id, household_id)
            .await?
        {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }

    async fn clear_shopping_list(&self, household_id: Uuid) -> Result<u64, CoreError> {
        self.shopping_list_repository.clear(household_id).await
    }

    #[instrument(skip(self, item_ids), fields(household_id = %household_id, selected = item_ids.len()))]
    async fn validate_shopping_list(
        &self,
        household_id: Uuid,
        item_ids: Vec<Uuid>,
    ) -> Result<ValidatedShoppingList, CoreError> {
        if item_ids.is_empty() {
            return Ok(ValidatedShoppingList { stocked: vec![] });
        }

        let _guard = self.locks.acquire(household_id).await;

        let stocked = self
            .shopping_list_repository
            .move_to_stock(household_id, item_ids)
            .await?;

        info!(stocked = stocked.len(), "Shopping list validated into stock");

        Ok(ValidatedShoppingList { stocked })
    }
}
