use crate::domain::common::{PlanningConfig, locks::HouseholdLocks};

/// Application service, generic over every port so tests can swap in mocks.
#[derive(Clone)]
pub struct Service<HH, FM, RC, ST, SL, MP, RR, PR, HC> {
    pub(crate) household_repository: HH,
    pub(crate) family_member_repository: FM,
    pub(crate) recipe_repository: RC,
    pub(crate) stock_repository: ST,
    pub(crate) shopping_list_repository: SL,
    pub(crate) meal_plan_repository: MP,
    pub(crate) reconciliation_repository: RR,
    pub(crate) proposition_repository: PR,
    pub(crate) health_check_repository: HC,
    pub(crate) planning: PlanningConfig,
    pub(crate) locks: HouseholdLocks,
}

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> Service<HH, FM, RC, ST, SL, MP, RR, PR, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        household_repository: HH,
        family_member_repository: FM,
        recipe_repository: RC,
        stock_repository: ST,
        shopping_list_repository: SL,
        meal_plan_repository: MP,
        reconciliation_repository: RR,
        proposition_repository: PR,
        health_check_repository: HC,
        planning: PlanningConfig,
    ) -> Self {
        Self {
            household_repository,
            family_member_repository,
            recipe_repository,
            stock_repository,
            shopping_list_repository,
            meal_plan_repository,
            reconciliation_repository,
            proposition_repository,
            health_check_repository,
            planning,
            locks: HouseholdLocks::new(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Service;
    use crate::domain::{
        common::PlanningConfig,
        family::ports::MockFamilyMemberRepository,
        health::ports::MockHealthCheckRepository,
        household::ports::MockHouseholdRepository,
        planning::ports::{MockMealPlanRepository, MockReconciliationRepository},
        proposition::ports::MockPropositionRepository,
        recipe::ports::MockRecipeRepository,
        shopping_list::ports::MockShoppingListRepository,
        stock::ports::MockStockRepository,
    };

    pub(crate) type MockService = Service<
        MockHouseholdRepository,
        MockFamilyMemberRepository,
        MockRecipeRepository,
        MockStockRepository,
        MockShoppingListRepository,
        MockMealPlanRepository,
        MockReconciliationRepository,
        MockPropositionRepository,
        MockHealthCheckRepository,
    >;

    /// Mocks without expectations; any unexpected call panics.
    pub(crate) struct MockServiceBuilder {
        household: MockHouseholdRepository,
        family: MockFamilyMemberRepository,
        recipe: MockRecipeRepository,
        stock: MockStockRepository,
        shopping_list: MockShoppingListRepository,
        meal_plan: MockMealPlanRepository,
        reconciliation: MockReconciliationRepository,
        proposition: MockPropositionRepository,
        planning: PlanningConfig,
    }

    pub(crate) fn mock_service() -> MockServiceBuilder {
        MockServiceBuilder {
            household: MockHouseholdRepository::new(),
            family: MockFamilyMemberRepository::new(),
            recipe: MockRecipeRepository::new(),
            stock: MockStockRepository::new(),
            shopping_list: MockShoppingListRepository::new(),
            meal_plan: MockMealPlanRepository::new(),
            reconciliation: MockReconciliationRepository::new(),
            proposition: MockPropositionRepository::new(),
            planning: PlanningConfig::default(),
        }
    }

    impl MockServiceBuilder {
        pub(crate) fn with_household(mut self, household: MockHouseholdRepository) -> Self {
            self.household = household;
            self
        }

        pub(crate) fn with_family(mut self, family: MockFamilyMemberRepository) -> Self {
            self.family = family;
            self
        }

        pub(crate) fn with_recipe(mut self, recipe: MockRecipeRepository) -> Self {
            self.recipe = recipe;
            self
        }

        pub(crate) fn with_stock(mut self, stock: MockStockRepository) -> Self {
            self.stock = stock;
            self
        }

        pub(crate) fn with_shopping_list(mut self, shopping_list: MockShoppingListRepository) -> Self {
            self.shopping_list = shopping_list;
            self
        }

        pub(crate) fn with_meal_plan(mut self, meal_plan: MockMealPlanRepository) -> Self {
            self.meal_plan = meal_plan;
            self
        }

        pub(crate) fn with_reconciliation(
            mut self,
            reconciliation: MockReconciliationRepository,
        ) -> Self {
            self.reconciliation = reconciliation;
            self
        }

        pub(crate) fn with_proposition(mut self, proposition: MockPropositionRepository) -> Self {
            self.proposition = proposition;
            self
        }

        pub(crate) fn with_planning(mut self, planning: PlanningConfig) -> Self {
            self.planning = planning;
            self
        }

        pub(crate) fn build(self) -> MockService {
            Service::new(
                self.household,
                self.family,
                self.recipe,
                self.stock,
                self.shopping_list,
                self.meal_plan,
                self.reconciliation,
                self.proposition,
                MockHealthCheckRepository::new(),
                self.planning,
            )
        }
    }
}
