use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeComment, RecipeLikes},
        value_objects::{CreateRecipeInput, GetRecipesFilter, UpdateRecipeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Household recipes plus public ones, ordered by name.
    fn list_visible(
        &self,
        household_id: Uuid,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// A recipe owned by the household or a public one.
    fn get_visible(
        &self,
        recipe_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete(
        &self,
        recipe_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Adds the household's like, or removes it when already present.
    fn toggle_like(
        &self,
        recipe_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<RecipeLikes, CoreError>> + Send;

    fn add_comment(
        &self,
        comment: RecipeComment,
    ) -> impl Future<Output = Result<RecipeComment, CoreError>> + Send;

    /// Oldest first.
    fn list_comments(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeComment>, CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn get_recipes(
        &self,
        household_id: Uuid,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn create_recipe(
        &self,
        household_id: Uuid,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_recipe(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Publishes or unpublishes a recipe owned by the household.
    fn set_recipe_visibility(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
        published: bool,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Copies a public recipe into the household's own recipes.
    fn save_recipe(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn toggle_recipe_like(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<RecipeLikes, CoreError>> + Send;

    fn add_recipe_comment(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
        body: String,
    ) -> impl Future<Output = Result<RecipeComment, CoreError>> + Send;

    fn get_recipe_comments(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeComment>, CoreError>> + Send;
}
