use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "Homme")]
    Male,
    #[serde(rename = "Femme")]
    Female,
    #[serde(rename = "Autre", other)]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Homme",
            Gender::Female => "Femme",
            Gender::Other => "Autre",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = std::convert::Infallible;

    /// Anything that is not one of the two known values counts as unspecified.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Homme" => Gender::Male,
            "Femme" => Gender::Female,
            _ => Gender::Other,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FamilyMember {
    pub id: Uuid,
    pub household_id: Uuid,
    pub full_name: String,
    /// `None` when the age was never given or could not be read as a number.
    pub age: Option<i32>,
    pub gender: Gender,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FamilyMemberConfig {
    pub household_id: Uuid,
    pub full_name: String,
    pub age: Option<i32>,
    pub gender: Gender,
    pub email: Option<String>,
}

impl FamilyMember {
    pub fn new(config: FamilyMemberConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            household_id: config.household_id,
            full_name: config.full_name,
            age: config.age,
            gender: config.gender,
            email: config.email,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        full_name: Option<String>,
        age: Option<i32>,
        gender: Option<Gender>,
        email: Option<String>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(full_name) = full_name {
            self.full_name = full_name;
        }
        if let Some(age) = age {
            self.age = Some(age);
        }
        if let Some(gender) = gender {
            self.gender = gender;
        }
        if let Some(email) = email {
            self.email = Some(email);
        }
        self.updated_at = now;
    }
}
