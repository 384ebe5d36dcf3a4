use crate::{
    domain::common::{MealwiseConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        family::PostgresFamilyMemberRepository,
        health::PostgresHealthCheckRepository,
        household::PostgresHouseholdRepository,
        planning::{PostgresMealPlanRepository, PostgresReconciliationRepository},
        proposition::PostgresPropositionRepository,
        recipe::PostgresRecipeRepository,
        shopping_list::PostgresShoppingListRepository,
        stock::PostgresStockRepository,
    },
};

pub type MealwiseService = Service<
    PostgresHouseholdRepository,
    PostgresFamilyMemberRepository,
    PostgresRecipeRepository,
    PostgresStockRepository,
    PostgresShoppingListRepository,
    PostgresMealPlanRepository,
    PostgresReconciliationRepository,
    PostgresPropositionRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: MealwiseConfig) -> Result<MealwiseService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: config.database.max_connections,
    })
    .await?;

    let db = postgres.get_db();

    Ok(Service::new(
        PostgresHouseholdRepository::new(db.clone()),
        PostgresFamilyMemberRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresStockRepository::new(db.clone()),
        PostgresShoppingListRepository::new(db.clone()),
        PostgresMealPlanRepository::new(db.clone()),
        PostgresReconciliationRepository::new(db.clone()),
        PostgresPropositionRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        config.planning,
    ))
}
