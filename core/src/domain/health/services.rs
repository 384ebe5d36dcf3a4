use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    family::ports::FamilyMemberRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    household::ports::HouseholdRepository,
    planning::ports::{MealPlanRepository, ReconciliationRepository},
    proposition::ports::PropositionRepository,
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
    stock::ports::StockRepository,
};

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> HealthCheckService
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
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
