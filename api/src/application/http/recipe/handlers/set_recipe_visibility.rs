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
    http::{
        recipe::validators::RecipeVisibilityValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SetRecipeVisibilityResponse {
    pub data: Recipe,
}

#[utoipa::path(
    put,
    path = "/{recipe_id}/visibility",
    tag = "recipe",
    summary = "Publish or unpublish a recipe",
    description = "Only the household that owns the recipe may change its visibility.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = RecipeVisibilityValidator,
    responses(
        (status = 200, body = SetRecipeVisibilityResponse),
        (status = 403, description = "Recipe owned by someone else"),
        (status = 404, description = "Recipe not visible to this household")
    ),
)]
pub async fn set_recipe_visibility(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<RecipeVisibilityValidator>,
) -> Result<Response<SetRecipeVisibilityResponse>, ApiError> {
    let recipe = state
        .service
        .set_recipe_visibility(ctx.household_id, recipe_id, payload.published)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SetRecipeVisibilityResponse { data: recipe }))
}
