use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub household_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ShoppingListItemConfig {
    pub household_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub price: f64,
}

impl ShoppingListItem {
    pub fn new(config: ShoppingListItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            household_id: config.household_id,
            name: config.name,
            quantity: config.quantity,
            unit: config.unit,
            price: config.price,
            created_at: now,
        }
    }

    pub fn cost(&self) -> f64 {
        self.price * self.quantity
    }
}
