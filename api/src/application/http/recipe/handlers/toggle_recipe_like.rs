use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::recipe::{entities::RecipeLikes, ports::RecipeService};
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
pub struct ToggleRecipeLikeResponse {
    pub data: RecipeLikes,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/like",
    tag = "recipe",
    summary = "Like or unlike a public recipe",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = ToggleRecipeLikeResponse),
        (status = 400, description = "Recipe is private"),
        (status = 404, description = "Recipe not visible to this household")
    ),
)]
pub async fn toggle_recipe_like(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<ToggleRecipeLikeResponse>, ApiError> {
    let likes = state
        .service
        .toggle_recipe_like(ctx.household_id, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleRecipeLikeResponse { data: likes }))
}
