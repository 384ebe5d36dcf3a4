use std::collections::HashMap;

use sea_orm::{
    ActiveValue::Set,
    ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, OnConflict},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        recipe::{
            entities::{Recipe, RecipeComment, RecipeLikes},
            ports::RecipeRepository,
            value_objects::GetRecipesFilter,
        },
    },
    entity::{
        recipe_comments::{self, Column as CommentColumn, Entity as CommentEntity},
        recipe_ingredients::{self, Column as IngredientColumn, Entity as IngredientEntity},
        recipe_likes::{self, Column as LikeColumn, Entity as LikeEntity},
        recipes::{ActiveModel, Column, Entity, Model},
    },
    infrastructure::{
        db::transaction::{begin, commit},
        recipe::mappers::{to_ingredient_rows, to_recipe},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn visible_to(household_id: Uuid) -> Condition {
        Condition::any()
            .add(Column::HouseholdId.eq(household_id))
            .add(Column::HouseholdId.is_null())
            .add(Column::Published.eq(true))
    }

    async fn like_counts(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, u64>, CoreError> {
        let counts: Vec<(Uuid, i64)> = LikeEntity::find()
            .select_only()
            .column(LikeColumn::RecipeId)
            .column_as(Expr::col(LikeColumn::HouseholdId).count(), "likes")
            .filter(LikeColumn::RecipeId.is_in(ids.iter().copied()))
            .group_by(LikeColumn::RecipeId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count recipe likes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(counts
            .into_iter()
            .map(|(recipe_id, likes)| (recipe_id, likes.max(0) as u64))
            .collect())
    }

    async fn with_ingredients(&self, models: Vec<Model>) -> Result<Vec<Recipe>, CoreError> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let likes = self.like_counts(&ids).await?;
        let rows = IngredientEntity::find()
            .filter(IngredientColumn::RecipeId.is_in(ids))
            .order_by_asc(IngredientColumn::RecipeId)
            .order_by_asc(IngredientColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        let mut by_recipe: HashMap<Uuid, Vec<recipe_ingredients::Model>> = HashMap::new();
        for row in rows {
            by_recipe.entry(row.recipe_id).or_default().push(row);
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let ingredients = by_recipe.remove(&model.id).unwrap_or_default();
                let likes = likes.get(&model.id).copied().unwrap_or(0);
                to_recipe(model, &ingredients, likes)
            })
            .collect())
    }

    async fn replace_ingredients(
        txn: &DatabaseTransaction,
        recipe: &Recipe,
    ) -> Result<(), CoreError> {
        IngredientEntity::delete_many()
            .filter(IngredientColumn::RecipeId.eq(recipe.id))
            .exec(txn)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        let rows = to_ingredient_rows(recipe.id, &recipe.ingredients);
        if !rows.is_empty() {
            IngredientEntity::insert_many(rows)
                .exec(txn)
                .await
                .map_err(|e| {
                    error!("Failed to create recipe ingredients: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        Ok(())
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn list_visible(
        &self,
        household_id: Uuid,
        filter: GetRecipesFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        let mut query = Entity::find()
            .filter(Self::visible_to(household_id))
            .order_by_asc(Column::Name);

        // Alternative names live in a JSON column, so searches are matched in memory.
        if filter.search.is_none() {
            if let Some(offset) = filter.offset {
                query = query.offset(offset as u64);
            }
            if let Some(limit) = filter.limit {
                query = query.limit(limit as u64);
            }
        }

        let mut models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to list recipes: {}", e);
            CoreError::InternalServerError
        })?;

        if let Some(search) = filter.search.as_deref() {
            let needle = search.to_lowercase();
            models.retain(|model| {
                model.name.to_lowercase().contains(&needle)
                    || model
                        .alt_names
                        .as_array()
                        .into_iter()
                        .flatten()
                        .filter_map(|alt| alt.as_str())
                        .any(|alt| alt.to_lowercase().contains(&needle))
            });
            models = models
                .into_iter()
                .skip(filter.offset.unwrap_or(0) as usize)
                .take(filter.limit.map_or(usize::MAX, |l| l as usize))
                .collect();
        }

        self.with_ingredients(models).await
    }

    async fn get_visible(
        &self,
        recipe_id: Uuid,
        household_id: Uuid,
    ) -> Result<Option<Recipe>, CoreError> {
        let model = Entity::find_by_id(recipe_id)
            .filter(Self::visible_to(household_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        Ok(self.with_ingredients(vec![model]).await?.pop())
    }

    async fn create(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let txn = begin(&self.db).await?;

        Entity::insert(ActiveModel::from(&recipe))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;
        Self::replace_ingredients(&txn, &recipe).await?;

        commit(txn).await?;

        Ok(recipe)
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let txn = begin(&self.db).await?;

        Entity::update(ActiveModel::from(&recipe))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::InternalServerError
            })?;
        Self::replace_ingredients(&txn, &recipe).await?;

        commit(txn).await?;

        Ok(recipe)
    }

    async fn delete(&self, recipe_id: Uuid, household_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::HouseholdId.eq(household_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn toggle_like(
        &self,
        recipe_id: Uuid,
        household_id: Uuid,
    ) -> Result<RecipeLikes, CoreError> {
        let txn = begin(&self.db).await?;

        let removed = LikeEntity::delete_many()
            .filter(LikeColumn::RecipeId.eq(recipe_id))
            .filter(LikeColumn::HouseholdId.eq(household_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to remove recipe like: {}", e);
                CoreError::InternalServerError
            })?;

        let liked = removed.rows_affected == 0;
        if liked {
            LikeEntity::insert(recipe_likes::ActiveModel {
                recipe_id: Set(recipe_id),
                household_id: Set(household_id),
                created_at: Set(generate_timestamp().0.fixed_offset()),
            })
            .on_conflict(
                OnConflict::columns([LikeColumn::RecipeId, LikeColumn::HouseholdId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to add recipe like: {}", e);
                CoreError::InternalServerError
            })?;
        }

        let likes = LikeEntity::find()
            .filter(LikeColumn::RecipeId.eq(recipe_id))
            .count(&txn)
            .await
            .map_err(|e| {
                error!("Failed to count recipe likes: {}", e);
                CoreError::InternalServerError
            })?;

        commit(txn).await?;

        Ok(RecipeLikes {
            recipe_id,
            likes,
            liked,
        })
    }

    async fn add_comment(&self, comment: RecipeComment) -> Result<RecipeComment, CoreError> {
        CommentEntity::insert(recipe_comments::ActiveModel::from(&comment))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe comment: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(comment)
    }

    async fn list_comments(&self, recipe_id: Uuid) -> Result<Vec<RecipeComment>, CoreError> {
        let models = CommentEntity::find()
            .filter(CommentColumn::RecipeId.eq(recipe_id))
            .order_by_asc(CommentColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipe comments: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(RecipeComment::from).collect())
    }
}
