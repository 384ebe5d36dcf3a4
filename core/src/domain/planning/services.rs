use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    family::{coefficient::compute_coefficient, ports::FamilyMemberRepository},
    health::ports::HealthCheckRepository,
    household::ports::HouseholdRepository,
    planning::{
        calendar::plan_days,
        entities::{MealSlot, MealSlotConfig, MealType, PlanView},
        ports::{MealPlanRepository, PlanningService, ReconciliationRepository},
        reconciler::reconcile,
        value_objects::{AssignMealInput, MealPlan, PlanDay, PlanningOutcome},
    },
    proposition::ports::PropositionRepository,
    recipe::{entities::Recipe, ports::RecipeRepository},
    shopping_list::{ports::ShoppingListRepository, synthesizer::synthesize},
    stock::ports::StockRepository,
};

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> Service<HH, FM, RC, ST, SL, MP, RR, PR, HC>
where
    FM: FamilyMemberRepository,
    ST: StockRepository,
    RR: ReconciliationRepository,
{
    /// Runs coefficient, reconciliation and shopping-list synthesis for one slot and writes
    /// the result. The caller holds the household lock.
    ///
    /// The snapshot is re-read when another writer changed a stock row in between.
    async fn apply_recipe_to_stock(
        &self,
        household_id: Uuid,
        slot: &MealSlot,
        recipe: &Recipe,
    ) -> Result<PlanningOutcome, CoreError> {
        let max_attempts = self.planning.max_reconcile_attempts.max(1);
        let mut attempt = 1;

        loop {
            let members = self
                .family_member_repository
                .list_by_household(household_id)
                .await?;
            let coefficient = compute_coefficient(&members);

            let stock = self.stock_repository.list_by_household(household_id).await?;
            let reconciliation = reconcile(&recipe.ingredients, coefficient, &stock);
            let shopping_rows = synthesize(household_id, &reconciliation.missing);

            match self
                .reconciliation_repository
                .apply(
                    household_id,
                    slot.id,
                    reconciliation.deductions.clone(),
                    shopping_rows,
                )
                .await
            {
                Ok(slot) => {
                    info!(
                        slot_id = %slot.id,
                        coefficient,
                        deductions = reconciliation.deductions.len(),
                        missing = reconciliation.missing.len(),
                        "Recipe reconciled against stock"
                    );

                    return Ok(PlanningOutcome {
                        slot,
                        coefficient: Some(coefficient),
                        deductions: reconciliation.deductions,
                        missing: reconciliation.missing,
                    });
                }
                Err(CoreError::StaleStock) if attempt < max_attempts => {
                    warn!(slot_id = %slot.id, attempt, "Stock changed during reconciliation, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> PlanningService
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
    async fn get_plan(
        &self,
        household_id: Uuid,
        view: PlanView,
        reference: NaiveDate,
    ) -> Result<MealPlan, CoreError> {
        let days = plan_days(view, reference);
        let (Some(first), Some(last)) = (days.first().copied(), days.last().copied()) else {
            return Ok(MealPlan { view, days: vec![] });
        };

        let mut by_day: BTreeMap<NaiveDate, Vec<MealSlot>> = BTreeMap::new();
        for slot in self
            .meal_plan_repository
            .list_range(household_id, first, last)
            .await?
        {
            by_day.entry(slot.day).or_default().push(slot);
        }

        let days = days
            .into_iter()
            .map(|day| {
                let mut slots = by_day.remove(&day).unwrap_or_default();
                slots.sort_by_key(|slot| slot.meal_type);
                PlanDay { day, slots }
            })
            .collect();

        Ok(MealPlan { view, days })
    }

    #[instrument(skip(self, input), fields(household_id = %household_id, day = %input.day, meal_type = %input.meal_type))]
    async fn assign_meal(
        &self,
        household_id: Uuid,
        input: AssignMealInput,
    ) -> Result<PlanningOutcome, CoreError> {
        let recipe = self
            .recipe_repository
            .get_visible(input.recipe_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let auto_update = input
            .auto_update
            .unwrap_or(self.planning.auto_update_default);

        let _guard = self.locks.acquire(household_id).await;

        let slot = self
            .meal_plan_repository
            .upsert(MealSlot::new(MealSlotConfig {
                household_id,
                day: input.day,
                meal_type: input.meal_type,
                recipe_id: recipe.id,
                recipe_name: recipe.name.clone(),
                image: recipe.image.clone(),
            }))
            .await?;

        if !auto_update {
            return Ok(PlanningOutcome::saved_only(slot));
        }

        self.apply_recipe_to_stock(household_id, &slot, &recipe)
            .await
    }

    async fn clear_meal(
        &self,
        household_id: Uuid,
        day: NaiveDate,
        meal_type: MealType,
    ) -> Result<(), CoreError> {
        if !self
            .meal_plan_repository
            .delete(household_id, day, meal_type)
            .await?
        {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }

    #[instrument(skip(self), fields(household_id = %household_id, from = %from, to = %to))]
    async fn sync_plan(
        &self,
        household_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PlanningOutcome>, CoreError> {
        if from > to {
            return Err(CoreError::Invalid("from must not be after to".to_string()));
        }

        let _guard = self.locks.acquire(household_id).await;

        let mut pending = self
            .meal_plan_repository
            .list_pending(household_id, from, to)
            .await?;
        pending.sort_by_key(|slot| (slot.day, slot.meal_type));

        let mut outcomes = Vec::with_capacity(pending.len());
        for slot in pending {
            let Some(recipe) = self
                .recipe_repository
                .get_visible(slot.recipe_id, household_id)
                .await?
            else {
                warn!(slot_id = %slot.id, recipe_id = %slot.recipe_id, "Planned recipe no longer exists, slot skipped");
                continue;
            };

            outcomes.push(self.apply_recipe_to_stock(household_id, &slot, &recipe).await?);
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::domain::{
        common::{PlanningConfig, services::test_support::mock_service},
        family::{
            entities::{FamilyMember, FamilyMemberConfig, Gender},
            ports::MockFamilyMemberRepository,
        },
        planning::ports::{MockMealPlanRepository, MockReconciliationRepository},
        recipe::{
            entities::{Ingredient, RecipeConfig},
            ports::MockRecipeRepository,
        },
        stock::{
            entities::{StockItem, StockItemConfig},
            ports::MockStockRepository,
        },
    };

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn recipe(household_id: Uuid) -> Recipe {
        Recipe::new(RecipeConfig {
            household_id: Some(household_id),
            name: "Riz au poisson".to_string(),
            alt_names: vec![],
            image: Some("riz.png".to_string()),
            ingredients: vec![
                Ingredient {
                    name: "Riz".to_string(),
                    quantity: Some(0.5),
                    unit: "kg".to_string(),
                    price: Some(1.5),
                },
                Ingredient {
                    name: "sel".to_string(),
                    quantity: Some(0.01),
                    unit: "kg".to_string(),
                    price: None,
                },
            ],
        })
    }

    fn adults(household_id: Uuid) -> Vec<FamilyMember> {
        [Gender::Male, Gender::Female]
            .into_iter()
            .map(|gender| {
                FamilyMember::new(FamilyMemberConfig {
                    household_id,
                    full_name: "Parent".to_string(),
                    age: Some(35),
                    gender,
                    email: None,
                })
            })
            .collect()
    }

    fn rice_stock(household_id: Uuid, quantity: f64) -> StockItem {
        StockItem::new(StockItemConfig {
            household_id,
            name: "riz".to_string(),
            quantity,
            unit: "kg".to_string(),
            expiration_date: None,
        })
    }

    fn recipe_repository(recipe: Recipe) -> MockRecipeRepository {
        let mut repository = MockRecipeRepository::new();
        repository.expect_get_visible().returning(move |_, _| {
            let recipe = recipe.clone();
            Box::pin(async move { Ok(Some(recipe)) })
        });
        repository
    }

    fn family_repository(household_id: Uuid) -> MockFamilyMemberRepository {
        let mut repository = MockFamilyMemberRepository::new();
        repository.expect_list_by_household().returning(move |_| {
            let members = adults(household_id);
            Box::pin(async move { Ok(members) })
        });
        repository
    }

    fn upserting_meal_plan() -> MockMealPlanRepository {
        let mut repository = MockMealPlanRepository::new();
        repository
            .expect_upsert()
            .times(1)
            .returning(|slot| Box::pin(async move { Ok(slot) }));
        repository
    }

    fn input(recipe_id: Uuid, auto_update: Option<bool>) -> AssignMealInput {
        AssignMealInput {
            day: date("2025-03-12"),
            meal_type: MealType::Lunch,
            recipe_id,
            auto_update,
        }
    }

    #[tokio::test]
    async fn assigning_a_meal_reconciles_stock_and_lists_missing_items() {
        let household_id = Uuid::new_v4();
        let recipe = recipe(household_id);
        let recipe_id = recipe.id;
        let stock = rice_stock(household_id, 3.0);
        let stock_id = stock.id;

        let mut stock_repository = MockStockRepository::new();
        stock_repository
            .expect_list_by_household()
            .with(eq(household_id))
            .returning(move |_| {
                let stock = vec![stock.clone()];
                Box::pin(async move { Ok(stock) })
            });

        let mut reconciliation = MockReconciliationRepository::new();
        reconciliation
            .expect_apply()
            .withf(move |hh, _, deductions, missing| {
                *hh == household_id
                    && deductions.len() == 1
                    && deductions[0].stock_item_id == stock_id
                    && missing.len() == 1
                    && missing[0].name == "sel"
                    && missing[0].household_id == household_id
            })
            .times(1)
            .returning(move |_, _, _, _| {
                let mut slot = MealSlot::new(MealSlotConfig {
                    household_id,
                    day: date("2025-03-12"),
                    meal_type: MealType::Lunch,
                    recipe_id,
                    recipe_name: "Riz au poisson".to_string(),
                    image: None,
                });
                slot.stock_applied = true;
                Box::pin(async move { Ok(slot) })
            });

        let service = mock_service()
            .with_recipe(recipe_repository(recipe))
            .with_family(family_repository(household_id))
            .with_stock(stock_repository)
            .with_meal_plan(upserting_meal_plan())
            .with_reconciliation(reconciliation)
            .build();

        let outcome = service
            .assign_meal(household_id, input(recipe_id, None))
            .await
            .unwrap();

        assert_eq!(outcome.coefficient, Some(2.0));
        assert!(outcome.slot.stock_applied);
        assert_eq!(outcome.deductions[0].new_quantity, 2.0);
        assert_eq!(outcome.missing.len(), 1);
        assert_eq!(outcome.missing[0].quantity, 0.02);
        assert_eq!(outcome.missing[0].price, 0.0);
    }

    #[tokio::test]
    async fn auto_update_off_only_saves_the_slot() {
        let household_id = Uuid::new_v4();
        let recipe = recipe(household_id);
        let recipe_id = recipe.id;

        let service = mock_service()
            .with_recipe(recipe_repository(recipe))
            .with_meal_plan(upserting_meal_plan())
            .build();

        let outcome = service
            .assign_meal(household_id, input(recipe_id, Some(false)))
            .await
            .unwrap();

        assert_eq!(outcome.coefficient, None);
        assert!(!outcome.slot.stock_applied);
        assert_eq!(outcome.slot.recipe_name, "Riz au poisson");
        assert!(outcome.deductions.is_empty() && outcome.missing.is_empty());
    }

    #[tokio::test]
    async fn configured_default_applies_when_caller_is_silent() {
        let household_id = Uuid::new_v4();
        let recipe = recipe(household_id);
        let recipe_id = recipe.id;

        let service = mock_service()
            .with_recipe(recipe_repository(recipe))
            .with_meal_plan(upserting_meal_plan())
            .with_planning(PlanningConfig {
                auto_update_default: false,
                max_reconcile_attempts: 3,
            })
            .build();

        let outcome = service
            .assign_meal(household_id, input(recipe_id, None))
            .await
            .unwrap();

        assert_eq!(outcome.coefficient, None);
    }

    #[tokio::test]
    async fn stale_stock_is_re_read_and_retried() {
        let household_id = Uuid::new_v4();
        let recipe = recipe(household_id);
        let recipe_id = recipe.id;

        let mut stock_repository = MockStockRepository::new();
        let mut reads = Sequence::new();
        stock_repository
            .expect_list_by_household()
            .times(1)
            .in_sequence(&mut reads)
            .returning(move |_| {
                let stock = vec![rice_stock(household_id, 3.0)];
                Box::pin(async move { Ok(stock) })
            });
        stock_repository
            .expect_list_by_household()
            .times(1)
            .in_sequence(&mut reads)
            .returning(move |_| {
                let stock = vec![rice_stock(household_id, 1.5)];
                Box::pin(async move { Ok(stock) })
            });

        let mut reconciliation = MockReconciliationRepository::new();
        let mut writes = Sequence::new();
        reconciliation
            .expect_apply()
            .times(1)
            .in_sequence(&mut writes)
            .returning(|_, _, _, _| Box::pin(async { Err(CoreError::StaleStock) }));
        reconciliation
            .expect_apply()
            .times(1)
            .in_sequence(&mut writes)
            .returning(move |_, _, _, _| {
                let slot = MealSlot::new(MealSlotConfig {
                    household_id,
                    day: date("2025-03-12"),
                    meal_type: MealType::Lunch,
                    recipe_id,
                    recipe_name: "Riz au poisson".to_string(),
                    image: None,
                });
                Box::pin(async move { Ok(slot) })
            });

        let service = mock_service()
            .with_recipe(recipe_repository(recipe))
            .with_family(family_repository(household_id))
            .with_stock(stock_repository)
            .with_meal_plan(upserting_meal_plan())
            .with_reconciliation(reconciliation)
            .build();

        let outcome = service
            .assign_meal(household_id, input(recipe_id, Some(true)))
            .await
            .unwrap();

        assert_eq!(outcome.deductions[0].new_quantity, 0.5);
    }

    #[tokio::test]
    async fn retries_are_bounded() {
        let household_id = Uuid::new_v4();
        let recipe = recipe(household_id);
        let recipe_id = recipe.id;

        let mut stock_repository = MockStockRepository::new();
        stock_repository
            .expect_list_by_household()
            .times(3)
            .returning(move |_| {
                let stock = vec![rice_stock(household_id, 3.0)];
                Box::pin(async move { Ok(stock) })
            });

        let mut reconciliation = MockReconciliationRepository::new();
        reconciliation
            .expect_apply()
            .times(3)
            .returning(|_, _, _, _| Box::pin(async { Err(CoreError::StaleStock) }));

        let service = mock_service()
            .with_recipe(recipe_repository(recipe))
            .with_family(family_repository(household_id))
            .with_stock(stock_repository)
            .with_meal_plan(upserting_meal_plan())
            .with_reconciliation(reconciliation)
            .build();

        let result = service
            .assign_meal(household_id, input(recipe_id, Some(true)))
            .await;

        assert_eq!(result, Err(CoreError::StaleStock));
    }

    #[tokio::test]
    async fn unknown_recipe_is_not_found() {
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_visible()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let service = mock_service().with_recipe(recipes).build();

        let result = service
            .assign_meal(Uuid::new_v4(), input(Uuid::new_v4(), Some(true)))
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn weekly_plan_groups_slots_by_day_in_meal_order() {
        let household_id = Uuid::new_v4();
        let slot = |day: &str, meal_type: MealType| {
            MealSlot::new(MealSlotConfig {
                household_id,
                day: date(day),
                meal_type,
                recipe_id: Uuid::new_v4(),
                recipe_name: meal_type.to_string(),
                image: None,
            })
        };
        let stored = vec![
            slot("2025-03-12", MealType::Dinner),
            slot("2025-03-12", MealType::Breakfast),
            slot("2025-03-16", MealType::Lunch),
        ];

        let mut meal_plan = MockMealPlanRepository::new();
        meal_plan
            .expect_list_range()
            .with(eq(household_id), eq(date("2025-03-10")), eq(date("2025-03-16")))
            .returning(move |_, _, _| {
                let stored = stored.clone();
                Box::pin(async move { Ok(stored) })
            });

        let service = mock_service().with_meal_plan(meal_plan).build();

        let plan = service
            .get_plan(household_id, PlanView::Weekly, date("2025-03-12"))
            .await
            .unwrap();

        assert_eq!(plan.days.len(), 7);
        assert!(plan.days[0].slots.is_empty());
        let wednesday: Vec<_> = plan.days[2].slots.iter().map(|s| s.meal_type).collect();
        assert_eq!(wednesday, vec![MealType::Breakfast, MealType::Dinner]);
        assert_eq!(plan.days[6].slots.len(), 1);
    }

    #[tokio::test]
    async fn sync_rejects_reversed_range() {
        let service = mock_service().build();

        let result = service
            .sync_plan(Uuid::new_v4(), date("2025-03-12"), date("2025-03-10"))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn clearing_an_empty_slot_is_not_found() {
        let mut meal_plan = MockMealPlanRepository::new();
        meal_plan
            .expect_delete()
            .returning(|_, _, _| Box::pin(async { Ok(false) }));

        let service = mock_service().with_meal_plan(meal_plan).build();

        let result = service
            .clear_meal(Uuid::new_v4(), date("2025-03-12"), MealType::Dinner)
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}
