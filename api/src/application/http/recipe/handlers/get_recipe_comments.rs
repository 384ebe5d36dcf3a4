use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::recipe::{entities::RecipeComment, ports::RecipeService};
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
pub struct GetRecipeCommentsResponse {
    pub data: Vec<RecipeComment>,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}/comments",
    tag = "recipe",
    summary = "List comments of a public recipe",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = GetRecipeCommentsResponse),
        (status = 400, description = "Recipe is private"),
        (status = 404, description = "Recipe not visible to this household")
    ),
)]
pub async fn get_recipe_comments(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<GetRecipeCommentsResponse>, ApiError> {
    let comments = state
        .service
        .get_recipe_comments(ctx.household_id, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeCommentsResponse { data: comments }))
}
