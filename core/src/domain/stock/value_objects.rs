use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::stock::{entities::StockItem, expiration::ExpirationStatus};

#[derive(Debug, Clone)]
pub struct CreateStockItemInput {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: String,
    pub expiration_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStockItemInput {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    /// `Some(None)` clears the date.
    pub expiration_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockItemView {
    #[serde(flatten)]
    pub item: StockItem,
    pub expiration_status: Option<ExpirationStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExpirationAlert {
    pub stock_item_id: Uuid,
    pub name: String,
    pub days_left: i64,
    pub status: ExpirationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExpirationReport {
    /// Expired items, already deleted from stock.
    pub removed: Vec<StockItem>,
    pub alerts: Vec<ExpirationAlert>,
}
