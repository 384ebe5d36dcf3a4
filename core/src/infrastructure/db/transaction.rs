use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub async fn begin(db: &DatabaseConnection) -> Result<DatabaseTransaction, CoreError> {
    db.begin().await.map_err(|e| {
        error!("Failed to begin transaction: {}", e);
        CoreError::InternalServerError
    })
}

pub async fn commit(txn: DatabaseTransaction) -> Result<(), CoreError> {
    txn.commit().await.map_err(|e| {
        error!("Failed to commit transaction: {}", e);
        CoreError::InternalServerError
    })
}
