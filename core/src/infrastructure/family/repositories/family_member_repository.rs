use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        family::{entities::FamilyMember, ports::FamilyMemberRepository},
    },
    entity::family_members::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFamilyMemberRepository {
    pub db: DatabaseConnection,
}

impl PostgresFamilyMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FamilyMemberRepository for PostgresFamilyMemberRepository {
    async fn list_by_household(&self, household_id: Uuid) -> Result<Vec<FamilyMember>, CoreError> {
        let members = Entity::find()
            .filter(Column::HouseholdId.eq(household_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list family members: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(members.into_iter().map(FamilyMember::from).collect())
    }

    async fn get_by_id(
        &self,
        member_id: Uuid,
        household_id: Uuid,
    ) -> Result<Option<FamilyMember>, CoreError> {
        let member = Entity::find_by_id(member_id)
            .filter(Column::HouseholdId.eq(household_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get family member: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(member.map(FamilyMember::from))
    }

    async fn create(&self, member: FamilyMember) -> Result<FamilyMember, CoreError> {
        let created = Entity::insert(ActiveModel::from(&member))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create family member: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FamilyMember::from(created))
    }

    async fn update(&self, member: FamilyMember) -> Result<FamilyMember, CoreError> {
        let updated = Entity::update(ActiveModel::from(&member))
            .filter(Column::HouseholdId.eq(member.household_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update family member: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FamilyMember::from(updated))
    }

    async fn delete(&self, member_id: Uuid, household_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(member_id))
            .filter(Column::HouseholdId.eq(household_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete family member: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
