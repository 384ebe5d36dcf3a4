use mealwise_core::domain::recipe::entities::Ingredient;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_ingredients(ingredients: &[Ingredient]) -> Result<(), ValidationError> {
    let invalid = ingredients.iter().any(|ingredient| {
        ingredient.quantity.is_some_and(|q| q < 0.0) || ingredient.price.is_some_and(|p| p < 0.0)
    });

    if invalid {
        let mut error = ValidationError::new("ingredients");
        error.message = Some("ingredient quantity and price must not be negative".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub alt_names: Vec<String>,

    #[serde(default)]
    pub image: Option<String>,

    /// Quantities are for one adult portion.
    #[validate(custom(function = "validate_ingredients"))]
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub alt_names: Option<Vec<String>>,

    #[serde(default)]
    pub image: Option<String>,

    /// Replaces the whole ingredient list when present.
    #[validate(custom(function = "validate_ingredients"))]
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeVisibilityValidator {
    pub published: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeCommentValidator {
    #[validate(length(min = 1, max = 2000, message = "comment must be 1 to 2000 characters"))]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantities_are_rejected() {
        let recipe: CreateRecipeValidator = serde_json::from_str(
            r#"{"name":"Yassa","ingredients":[{"name":"oignon","quantity":-1,"unit":"kg","price":null}]}"#,
        )
        .unwrap();
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn minimal_recipe_is_valid() {
        let recipe: CreateRecipeValidator = serde_json::from_str(r#"{"name":"Mafé"}"#).unwrap();
        assert!(recipe.validate().is_ok());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.alt_names.is_empty());
    }

    #[test]
    fn partial_update_is_valid() {
        let update: UpdateRecipeValidator =
            serde_json::from_str(r#"{"alt_names":["Maafe"]}"#).unwrap();
        assert!(update.validate().is_ok());
        assert!(update.ingredients.is_none());
    }

    #[test]
    fn comments_need_a_body() {
        let empty: RecipeCommentValidator = serde_json::from_str(r#"{"body":""}"#).unwrap();
        assert!(empty.validate().is_err());

        let comment: RecipeCommentValidator =
            serde_json::from_str(r#"{"body":"Très bon avec du piment"}"#).unwrap();
        assert!(comment.validate().is_ok());
    }

    #[test]
    fn visibility_requires_the_flag() {
        assert!(serde_json::from_str::<RecipeVisibilityValidator>("{}").is_err());
    }
}
