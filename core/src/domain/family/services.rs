use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    family::{
        coefficient::compute_coefficient,
        entities::{FamilyMember, FamilyMemberConfig},
        ports::{FamilyMemberRepository, FamilyService},
        value_objects::{CreateFamilyMemberInput, UpdateFamilyMemberInput},
    },
    health::ports::HealthCheckRepository,
    household::ports::HouseholdRepository,
    planning::ports::{MealPlanRepository, ReconciliationRepository},
    proposition::ports::PropositionRepository,
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
    stock::ports::StockRepository,
};

fn ensure_valid_member(full_name: Option<&str>, age: Option<i32>) -> Result<(), CoreError> {
    if let Some(full_name) = full_name
        && full_name.trim().is_empty()
    {
        return Err(CoreError::Invalid("full_name is required".to_string()));
    }
    if let Some(age) = age
        && age < 0
    {
        return Err(CoreError::Invalid("age must not be negative".to_string()));
    }
    Ok(())
}

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> FamilyService
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
    async fn get_family_members(&self, household_id: Uuid) -> Result<Vec<FamilyMember>, CoreError> {
        self.family_member_repository
            .list_by_household(household_id)
            .await
    }

    async fn get_family_member(
        &self,
        household_id: Uuid,
        member_id: Uuid,
    ) -> Result<FamilyMember, CoreError> {
        self.family_member_repository
            .get_by_id(member_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(household_id = %household_id))]
    async fn create_family_member(
        &self,
        household_id: Uuid,
        input: CreateFamilyMemberInput,
    ) -> Result<FamilyMember, CoreError> {
        ensure_valid_member(Some(&input.full_name), input.age)?;

        let member = FamilyMember::new(FamilyMemberConfig {
            household_id,
            full_name: input.full_name,
            age: input.age,
            gender: input.gender,
            email: input.email,
        });

        self.family_member_repository.create(member).await
    }

    #[instrument(skip(self, input), fields(household_id = %household_id, member_id = %member_id))]
    async fn update_family_member(
        &self,
        household_id: Uuid,
        member_id: Uuid,
        input: UpdateFamilyMemberInput,
    ) -> Result<FamilyMember, CoreError> {
        ensure_valid_member(input.full_name.as_deref(), input.age)?;

        let mut member = self
            .family_member_repository
            .get_by_id(member_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        member.update(input.full_name, input.age, input.gender, input.email);

        self.family_member_repository.update(member).await
    }

    async fn delete_family_member(
        &self,
        household_id: Uuid,
        member_id: Uuid,
    ) -> Result<(), CoreError> {
        self.family_member_repository
            .get_by_id(member_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.family_member_repository
            .delete(member_id, household_id)
            .await
    }

    async fn get_family_coefficient(&self, household_id: Uuid) -> Result<f64, CoreError> {
        let members = self
            .family_member_repository
            .list_by_household(household_id)
            .await?;

        Ok(compute_coefficient(&members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_validation() {
        assert!(ensure_valid_member(Some("Awa"), Some(0)).is_ok());
        assert!(ensure_valid_member(None, None).is_ok());
        assert_eq!(
            ensure_valid_member(Some("  "), Some(30)),
            Err(CoreError::Invalid("full_name is required".to_string()))
        );
        assert!(ensure_valid_member(Some("Awa"), Some(-1)).is_err());
    }
}
