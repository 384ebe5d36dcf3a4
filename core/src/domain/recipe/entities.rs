use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    /// Quantity for one adult portion.
    pub quantity: Option<f64>,
    pub unit: String,
    pub price: Option<f64>,
}

impl Ingredient {
    /// Ingredients without a name, a positive quantity or a unit take no part in stock
    /// reconciliation. Returns the usable quantity.
    pub fn usable_quantity(&self) -> Option<f64> {
        if self.name.is_empty() || self.unit.is_empty() {
            return None;
        }
        self.quantity.filter(|q| *q > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    /// `None` for catalogue recipes shared by every household.
    pub household_id: Option<Uuid>,
    pub name: String,
    pub alt_names: Vec<String>,
    pub image: Option<String>,
    pub ingredients: Vec<Ingredient>,
    /// Household recipe shared with every other household.
    pub published: bool,
    /// Public recipe this one was copied from.
    pub source_recipe_id: Option<Uuid>,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub household_id: Option<Uuid>,
    pub name: String,
    pub alt_names: Vec<String>,
    pub image: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            household_id: config.household_id,
            name: config.name,
            alt_names: config.alt_names,
            image: config.image,
            ingredients: config.ingredients,
            published: false,
            source_recipe_id: None,
            likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Private copy owned by `household_id`. Later edits on either side stay independent.
    pub fn copy_for(&self, household_id: Uuid) -> Self {
        let mut copy = Recipe::new(RecipeConfig {
            household_id: Some(household_id),
            name: self.name.clone(),
            alt_names: self.alt_names.clone(),
            image: self.image.clone(),
            ingredients: self.ingredients.clone(),
        });
        copy.source_recipe_id = Some(self.id);
        copy
    }

    pub fn set_published(&mut self, published: bool) {
        let (now, _) = generate_timestamp();

        self.published = published;
        self.updated_at = now;
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        alt_names: Option<Vec<String>>,
        image: Option<String>,
        ingredients: Option<Vec<Ingredient>>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(alt_names) = alt_names {
            self.alt_names = alt_names;
        }
        if let Some(image) = image {
            self.image = Some(image);
        }
        if let Some(ingredients) = ingredients {
            self.ingredients = ingredients;
        }
        self.updated_at = now;
    }

    /// Catalogue recipes and published household recipes.
    pub fn is_public(&self) -> bool {
        self.household_id.is_none() || self.published
    }

    pub fn is_owned_by(&self, household_id: Uuid) -> bool {
        self.household_id == Some(household_id)
    }

    /// Case-insensitive substring match on the name or any alternative name.
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .alt_names
                .iter()
                .any(|alt| alt.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeComment {
    pub id: Uuid,
    pub recipe_id: Uuid,
    /// Household of the author.
    pub household_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl RecipeComment {
    pub fn new(recipe_id: Uuid, household_id: Uuid, body: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            household_id,
            body,
            created_at: now,
        }
    }
}

/// Like count after a toggle, and whether the calling household now likes the recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeLikes {
    pub recipe_id: Uuid,
    pub likes: u64,
    pub liked: bool,
}
