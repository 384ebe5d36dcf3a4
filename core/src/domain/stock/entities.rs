use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockItem {
    pub id: Uuid,
    pub household_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub expiration_date: Option<NaiveDate>,
    pub added_at: DateTime<Utc>,
    /// Bumped on every write; reconciliation only writes rows whose version it has read.
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StockItemConfig {
    pub household_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub expiration_date: Option<NaiveDate>,
}

impl StockItem {
    pub fn new(config: StockItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            household_id: config.household_id,
            name: config.name,
            quantity: config.quantity,
            unit: config.unit,
            expiration_date: config.expiration_date,
            added_at: now,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        quantity: Option<f64>,
        unit: Option<String>,
        expiration_date: Option<Option<NaiveDate>>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(quantity) = quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = unit {
            self.unit = unit;
        }
        if let Some(expiration_date) = expiration_date {
            self.expiration_date = expiration_date;
        }
        self.updated_at = now;
    }

    /// Stock and ingredients match on lower-cased name and exact unit.
    pub fn matches(&self, name: &str, unit: &str) -> bool {
        self.unit == unit && self.name.to_lowercase() == name.to_lowercase()
    }
}
