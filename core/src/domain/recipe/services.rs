use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    family::ports::FamilyMemberRepository,
    health::ports::HealthCheckRepository,
    household::ports::HouseholdRepository,
    planning::ports::{MealPlanRepository, ReconciliationRepository},
    proposition::ports::PropositionRepository,
    recipe::{
        entities::{Ingredient, Recipe, RecipeComment, RecipeConfig, RecipeLikes},
        ports::{RecipeRepository, RecipeService},
        value_objects::{CreateRecipeInput, GetRecipesFilter, UpdateRecipeInput},
    },
    shopping_list::ports::ShoppingListRepository,
    stock::ports::StockRepository,
};

fn ensure_valid_ingredients(ingredients: &[Ingredient]) -> Result<(), CoreError> {
    for ingredient in ingredients {
        if ingredient.quantity.is_some_and(|q| q < 0.0) {
            return Err(CoreError::Invalid(format!(
                "quantity of '{}' must not be negative",
                ingredient.name
            )));
        }
        if ingredient.price.is_some_and(|p| p < 0.0) {
            return Err(CoreError::Invalid(format!(
                "price of '{}' must not be negative",
                ingredient.name
            )));
        }
    }
    Ok(())
}

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> Service<HH, FM, RC, ST, SL, MP, RR, PR, HC>
where
    RC: RecipeRepository,
{
    /// Loads a recipe the household may modify. Catalogue recipes and other households' recipes are read-only.
    async fn owned_recipe(&self, household_id: Uuid, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        let recipe = self
            .recipe_repository
            .get_visible(recipe_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if recipe.household_id != Some(household_id) {
            return Err(CoreError::Forbidden);
        }

        Ok(recipe)
    }

    /// Loads a recipe that other households may like, comment or save.
    async fn shared_recipe(&self, household_id: Uuid, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        let recipe = self
            .recipe_repository
            .get_visible(recipe_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if !recipe.is_public() {
            return Err(CoreError::Invalid("recipe is not published".to_string()));
        }

        Ok(recipe)
    }
}

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> RecipeService
    for Service<HH, FM, RC, ST, SL, MP, RR, PR, HC>
where
    HH: HouseholdRepository,
    FM: FamilyMemberRepository,
    RC: RecipeRepository,
    ST: StockRepository,
    SL: ShoppingListRepository,
    MP: MealPlanRepository,
    RR: ReconciliationRepository,
    PR: PropositionRepository,
    HC: HealthCheckRepository,
{
    async fn get_recipes(
        &self,
        household_id: Uuid,
        filter: GetRecipesFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository
            .list_visible(household_id, filter)
            .await
    }

    async fn get_recipe(&self, household_id: Uuid, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_visible(recipe_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(household_id = %household_id))]
    async fn create_recipe(
        &self,
        household_id: Uuid,
        input: CreateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid("name is required".to_string()));
        }
        ensure_valid_ingredients(&input.ingredients)?;

        let recipe = Recipe::new(RecipeConfig {
            household_id: Some(household_id),
            name: input.name,
            alt_names: input.alt_names,
            image: input.image,
            ingredients: input.ingredients,
        });

        let created = self.recipe_repository.create(recipe).await?;

        info!(
            recipe_id = %created.id,
            ingredients = created.ingredients.len(),
            "Recipe created"
        );

        Ok(created)
    }

    async fn update_recipe(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        if input.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(CoreError::Invalid("name is required".to_string()));
        }
        if let Some(ingredients) = &input.ingredients {
            ensure_valid_ingredients(ingredients)?;
        }

        let mut recipe = self.owned_recipe(household_id, recipe_id).await?;
        recipe.update(input.name, input.alt_names, input.image, input.ingredients);

        self.recipe_repository.update(recipe).await
    }

    async fn delete_recipe(&self, household_id: Uuid, recipe_id: Uuid) -> Result<(), CoreError> {
        self.owned_recipe(household_id, recipe_id).await?;

        self.recipe_repository.delete(recipe_id, household_id).await
    }

    #[instrument(skip(self), fields(household_id = %household_id))]
    async fn set_recipe_visibility(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
        published: bool,
    ) -> Result<Recipe, CoreError> {
        let mut recipe = self.owned_recipe(household_id, recipe_id).await?;
        recipe.set_published(published);

        let updated = self.recipe_repository.update(recipe).await?;
        info!(recipe_id = %updated.id, published, "Recipe visibility changed");

        Ok(updated)
    }

    #[instrument(skip(self), fields(household_id = %household_id))]
    async fn save_recipe(&self, household_id: Uuid, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        let source = self.shared_recipe(household_id, recipe_id).await?;
        if source.is_owned_by(household_id) {
            return Err(CoreError::Invalid(
                "recipe already belongs to the household".to_string(),
            ));
        }

        let created = self
            .recipe_repository
            .create(source.copy_for(household_id))
            .await?;

        info!(recipe_id = %created.id, source_recipe_id = %source.id, "Recipe saved");

        Ok(created)
    }

    async fn toggle_recipe_like(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<RecipeLikes, CoreError> {
        self.shared_recipe(household_id, recipe_id).await?;

        self.recipe_repository
            .toggle_like(recipe_id, household_id)
            .await
    }

    async fn add_recipe_comment(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
        body: String,
    ) -> Result<RecipeComment, CoreError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(CoreError::Invalid("comment is empty".to_string()));
        }
        self.shared_recipe(household_id, recipe_id).await?;

        self.recipe_repository
            .add_comment(RecipeComment::new(recipe_id, household_id, body.to_string()))
            .await
    }

    async fn get_recipe_comments(
        &self,
        household_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeComment>, CoreError> {
        self.shared_recipe(household_id, recipe_id).await?;

        self.recipe_repository.list_comments(recipe_id).await
    }
}
