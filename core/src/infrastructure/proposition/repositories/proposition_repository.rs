use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select,
    sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        proposition::{
            entities::{Proposition, PropositionMessage, PropositionStatus},
            ports::PropositionRepository,
        },
    },
    entity::{
        proposition_messages::{self, Column as MessageColumn, Entity as MessageEntity},
        propositions::{ActiveModel, Column, Entity},
        shopping_list_items,
    },
    infrastructure::{
        db::transaction::{begin, commit},
        proposition::mappers::to_propositions,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresPropositionRepository {
    pub db: DatabaseConnection,
}

impl PostgresPropositionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, query: Select<Entity>) -> Result<Vec<Proposition>, CoreError> {
        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to list propositions: {}", e);
            CoreError::InternalServerError
        })?;

        if models.is_empty() {
            return Ok(vec![]);
        }

        let messages = MessageEntity::find()
            .filter(MessageColumn::PropositionId.is_in(models.iter().map(|m| m.id)))
            .order_by_asc(MessageColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load proposition messages: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(to_propositions(models, messages))
    }
}

impl PropositionRepository for PostgresPropositionRepository {
    async fn create_from_shopping_list(
        &self,
        proposition: Proposition,
        item_ids: Vec<Uuid>,
    ) -> Result<Proposition, CoreError> {
        let txn = begin(&self.db).await?;

        Entity::insert(ActiveModel::from(&proposition))
            .exec_without_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create proposition: {}", e);
                CoreError::InternalServerError
            })?;

        shopping_list_items::Entity::delete_many()
            .filter(shopping_list_items::Column::HouseholdId.eq(proposition.household_id))
            .filter(shopping_list_items::Column::Id.is_in(item_ids))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to clear the sent shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        commit(txn).await?;

        Ok(proposition)
    }

    async fn get(&self, proposition_id: Uuid) -> Result<Option<Proposition>, CoreError> {
        Ok(self
            .load(Entity::find_by_id(proposition_id))
            .await?
            .pop())
    }

    async fn list_by_client(&self, household_id: Uuid) -> Result<Vec<Proposition>, CoreError> {
        self.load(
            Entity::find()
                .filter(Column::HouseholdId.eq(household_id))
                .order_by_desc(Column::CreatedAt),
        )
        .await
    }

    async fn list_by_status(
        &self,
        status: PropositionStatus,
    ) -> Result<Vec<Proposition>, CoreError> {
        self.load(
            Entity::find()
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::CreatedAt),
        )
        .await
    }

    async fn list_by_vendor(
        &self,
        vendor_id: Uuid,
        status: PropositionStatus,
    ) -> Result<Vec<Proposition>, CoreError> {
        self.load(
            Entity::find()
                .filter(Column::VendorId.eq(vendor_id))
                .filter(Column::Status.eq(status.as_str()))
                .order_by_asc(Column::AcceptedAt),
        )
        .await
    }

    async fn transition(
        &self,
        proposition: Proposition,
        from: PropositionStatus,
    ) -> Result<bool, CoreError> {
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(proposition.status.as_str()))
            .col_expr(Column::VendorId, Expr::value(proposition.vendor_id))
            .col_expr(
                Column::AcceptedAt,
                Expr::value(proposition.accepted_at.map(|at| at.fixed_offset())),
            )
            .col_expr(
                Column::DeliveredAt,
                Expr::value(proposition.delivered_at.map(|at| at.fixed_offset())),
            )
            .filter(Column::Id.eq(proposition.id))
            .filter(Column::Status.eq(from.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update proposition status: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn add_message(
        &self,
        message: PropositionMessage,
    ) -> Result<PropositionMessage, CoreError> {
        MessageEntity::insert(proposition_messages::ActiveModel::from(&message))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create proposition message: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(message)
    }
}
