use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use uuid::Uuid;

use crate::application::{
    household_middleware::HouseholdContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = Recipe),
        (status = 404, description = "Recipe not visible to this household")
    ),
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .get_recipe(ctx.household_id, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipe))
}
