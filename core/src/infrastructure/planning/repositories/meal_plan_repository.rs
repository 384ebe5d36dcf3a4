use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        planning::{
            entities::{MealSlot, MealType},
            ports::MealPlanRepository,
        },
    },
    entity::meal_slots::{ActiveModel, Column, Entity},
    infrastructure::planning::mappers::to_slots,
};

#[derive(Debug, Clone)]
pub struct PostgresMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_range(
        &self,
        household_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
        pending_only: bool,
    ) -> Result<Vec<MealSlot>, CoreError> {
        let mut query = Entity::find()
            .filter(Column::HouseholdId.eq(household_id))
            .filter(Column::Day.between(from, to));

        if pending_only {
            query = query.filter(Column::StockApplied.eq(false));
        }

        let models = query
            .order_by_asc(Column::Day)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list meal slots: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(to_slots(models))
    }
}

impl MealPlanRepository for PostgresMealPlanRepository {
    async fn list_range(
        &self,
        household_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<MealSlot>, CoreError> {
        self.find_range(household_id, from, to, false).await
    }

    async fn list_pending(
        &self,
        household_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<MealSlot>, CoreError> {
        self.find_range(household_id, from, to, true).await
    }

    async fn upsert(&self, slot: MealSlot) -> Result<MealSlot, CoreError> {
        let saved = Entity::insert(ActiveModel::from(&slot))
            .on_conflict(
                OnConflict::columns([Column::HouseholdId, Column::Day, Column::MealType])
                    .update_columns([
                        Column::RecipeId,
                        Column::RecipeName,
                        Column::Image,
                        Column::StockApplied,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save meal slot: {}", e);
                CoreError::InternalServerError
            })?;

        MealSlot::try_from(saved).map_err(|e| {
            error!("Saved meal slot is unreadable: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn delete(
        &self,
        household_id: Uuid,
        day: NaiveDate,
        meal_type: MealType,
    ) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::HouseholdId.eq(household_id))
            .filter(Column::Day.eq(day))
            .filter(Column::MealType.eq(meal_type.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete meal slot: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }
}
