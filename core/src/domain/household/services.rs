use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    family::ports::FamilyMemberRepository,
    health::ports::HealthCheckRepository,
    household::{
        entities::Household,
        ports::{HouseholdRepository, HouseholdService},
    },
    planning::ports::{MealPlanRepository, ReconciliationRepository},
    proposition::ports::PropositionRepository,
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
    stock::ports::StockRepository,
};

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> HouseholdService
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
    async fn get_or_create_household(&self, owner_ref: &str) -> Result<Household, CoreError> {
        if owner_ref.trim().is_empty() {
            return Err(CoreError::InvalidHousehold);
        }

        if let Some(household) = self.household_repository.get_by_owner(owner_ref).await? {
            return Ok(household);
        }

        let household = self
            .household_repository
            .create(Household::new(owner_ref.to_string()))
            .await?;

        info!(household_id = %household.id, "Household created");

        Ok(household)
    }
}
