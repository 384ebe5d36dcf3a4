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
    http::{
        recipe::validators::RecipeCommentValidator,
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
pub struct AddRecipeCommentResponse {
    pub data: RecipeComment,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/comments",
    tag = "recipe",
    summary = "Comment on a public recipe",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = RecipeCommentValidator,
    responses(
        (status = 201, body = AddRecipeCommentResponse),
        (status = 400, description = "Empty comment or private recipe"),
        (status = 404, description = "Recipe not visible to this household")
    ),
)]
pub async fn add_recipe_comment(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<RecipeCommentValidator>,
) -> Result<Response<AddRecipeCommentResponse>, ApiError> {
    let comment = state
        .service
        .add_recipe_comment(ctx.household_id, recipe_id, payload.body)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddRecipeCommentResponse { data: comment }))
}
