use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            other => Err(format!("unknown meal type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanView {
    #[default]
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealSlot {
    pub id: Uuid,
    pub household_id: Uuid,
    pub day: NaiveDate,
    pub meal_type: MealType,
    pub recipe_id: Uuid,
    pub recipe_name: String,
    pub image: Option<String>,
    /// Whether the recipe has been reconciled against stock.
    pub stock_applied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MealSlotConfig {
    pub household_id: Uuid,
    pub day: NaiveDate,
    pub meal_type: MealType,
    pub recipe_id: Uuid,
    pub recipe_name: String,
    pub image: Option<String>,
}

impl MealSlot {
    pub fn new(config: MealSlotConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            household_id: config.household_id,
            day: config.day,
            meal_type: config.meal_type,
            recipe_id: config.recipe_id,
            recipe_name: config.recipe_name,
            image: config.image,
            stock_applied: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_type_parsing() {
        assert_eq!("Lunch".parse::<MealType>(), Ok(MealType::Lunch));
        assert_eq!("dinner".parse::<MealType>(), Ok(MealType::Dinner));
        assert!("brunch".parse::<MealType>().is_err());
        assert!(MealType::Breakfast < MealType::Lunch && MealType::Lunch < MealType::Dinner);
    }
}
