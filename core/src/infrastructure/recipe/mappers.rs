use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use crate::{
    domain::{
        common::generate_uuid_v7,
        recipe::entities::{Ingredient, Recipe, RecipeComment},
    },
    entity::{recipe_comments, recipe_ingredients, recipes},
};

impl From<&recipe_ingredients::Model> for Ingredient {
    fn from(model: &recipe_ingredients::Model) -> Self {
        Self {
            name: model.name.clone(),
            quantity: model.quantity,
            unit: model.unit.clone(),
            price: model.price,
        }
    }
}

/// Builds a recipe from its row and its ingredient rows, already sorted by position.
pub fn to_recipe(
    model: recipes::Model,
    ingredients: &[recipe_ingredients::Model],
    likes: u64,
) -> Recipe {
    let alt_names = serde_json::from_value(model.alt_names).unwrap_or_default();

    Recipe {
        id: model.id,
        household_id: model.household_id,
        name: model.name,
        alt_names,
        image: model.image,
        ingredients: ingredients.iter().map(Ingredient::from).collect(),
        published: model.published,
        source_recipe_id: model.source_recipe_id,
        likes,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    }
}

impl From<&Recipe> for recipes::ActiveModel {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: Set(recipe.id),
            household_id: Set(recipe.household_id),
            name: Set(recipe.name.clone()),
            alt_names: Set(serde_json::json!(recipe.alt_names)),
            image: Set(recipe.image.clone()),
            published: Set(recipe.published),
            source_recipe_id: Set(recipe.source_recipe_id),
            created_at: Set(recipe.created_at.fixed_offset()),
            updated_at: Set(recipe.updated_at.fixed_offset()),
        }
    }
}

impl From<recipe_comments::Model> for RecipeComment {
    fn from(model: recipe_comments::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            household_id: model.household_id,
            body: model.body,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<&RecipeComment> for recipe_comments::ActiveModel {
    fn from(comment: &RecipeComment) -> Self {
        Self {
            id: Set(comment.id),
            recipe_id: Set(comment.recipe_id),
            household_id: Set(comment.household_id),
            body: Set(comment.body.clone()),
            created_at: Set(comment.created_at.fixed_offset()),
        }
    }
}

pub fn to_ingredient_rows(
    recipe_id: Uuid,
    ingredients: &[Ingredient],
) -> Vec<recipe_ingredients::ActiveModel> {
    ingredients
        .iter()
        .enumerate()
        .map(|(position, ingredient)| recipe_ingredients::ActiveModel {
            id: Set(generate_uuid_v7()),
            recipe_id: Set(recipe_id),
            position: Set(position as i32),
            name: Set(ingredient.name.clone()),
            quantity: Set(ingredient.quantity),
            unit: Set(ingredient.unit.clone()),
            price: Set(ingredient.price),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn alt_names_survive_the_json_column() {
        let now = Utc::now().fixed_offset();
        let model = recipes::Model {
            id: Uuid::new_v4(),
            household_id: None,
            name: "Yassa".to_string(),
            alt_names: serde_json::json!(["Yassa poulet", "Yassa ganaar"]),
            image: None,
            published: false,
            source_recipe_id: None,
            created_at: now,
            updated_at: now,
        };
        let ingredient = recipe_ingredients::Model {
            id: Uuid::new_v4(),
            recipe_id: model.id,
            position: 0,
            name: "oignon".to_string(),
            quantity: Some(0.3),
            unit: "kg".to_string(),
            price: None,
        };

        let recipe = to_recipe(model, &[ingredient], 3);

        assert_eq!(recipe.alt_names, vec!["Yassa poulet", "Yassa ganaar"]);
        assert_eq!(recipe.ingredients[0].name, "oignon");
        assert_eq!(recipe.likes, 3);
        assert!(recipe.is_public());
    }

    #[test]
    fn published_household_recipes_are_public() {
        let now = Utc::now().fixed_offset();
        let source_id = Uuid::new_v4();
        let model = recipes::Model {
            id: Uuid::new_v4(),
            household_id: Some(Uuid::new_v4()),
            name: "Thieb".to_string(),
            alt_names: serde_json::json!([]),
            image: None,
            published: true,
            source_recipe_id: Some(source_id),
            created_at: now,
            updated_at: now,
        };

        let recipe = to_recipe(model, &[], 0);

        assert!(recipe.is_public());
        assert_eq!(recipe.source_recipe_id, Some(source_id));
    }

    #[test]
    fn ingredient_rows_keep_their_order() {
        let recipe_id = Uuid::new_v4();
        let rows = to_ingredient_rows(
            recipe_id,
            &[
                Ingredient {
                    name: "riz".to_string(),
                    quantity: Some(0.5),
                    unit: "kg".to_string(),
                    price: None,
                },
                Ingredient {
                    name: "sel".to_string(),
                    quantity: Some(0.01),
                    unit: "kg".to_string(),
                    price: None,
                },
            ],
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].position, Set(1));
        assert_eq!(rows[1].recipe_id, Set(recipe_id));
    }
}
