use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        household::{entities::Household, ports::HouseholdRepository},
    },
    entity::households::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresHouseholdRepository {
    pub db: DatabaseConnection,
}

impl PostgresHouseholdRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HouseholdRepository for PostgresHouseholdRepository {
    async fn get_by_owner(&self, owner_ref: &str) -> Result<Option<Household>, CoreError> {
        let household = Entity::find()
            .filter(Column::OwnerRef.eq(owner_ref))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get household: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(household.map(Household::from))
    }

    async fn create(&self, household: Household) -> Result<Household, CoreError> {
        let active_model = ActiveModel {
            id: Set(household.id),
            owner_ref: Set(household.owner_ref.clone()),
            created_at: Set(household.created_at.fixed_offset()),
            updated_at: Set(household.updated_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .on_conflict(OnConflict::column(Column::OwnerRef).do_nothing().to_owned())
            .do_nothing()
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create household: {}", e);
                CoreError::InternalServerError
            })?;

        self.get_by_owner(&household.owner_ref)
            .await?
            .ok_or(CoreError::InternalServerError)
    }
}
