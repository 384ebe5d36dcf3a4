use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    household_middleware::HouseholdContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/save",
    tag = "recipe",
    summary = "Save a public recipe",
    description = "Copies the recipe into the household. The copy can be edited without touching the original.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 201, body = SaveRecipeResponse),
        (status = 400, description = "Recipe is private or already owned"),
        (status = 404, description = "Recipe not visible to this household")
    ),
)]
pub async fn save_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .save_recipe(ctx.household_id, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveRecipeResponse { data: recipe }))
}
