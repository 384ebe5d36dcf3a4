use axum::{Extension, extract::State};
use mealwise_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::CreateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        recipe::validators::CreateRecipeValidator,
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
pub struct CreateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    description = "Creates a recipe owned by the household.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = CreateRecipeResponse),
        (status = 400, description = "Invalid recipe")
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(
            ctx.household_id,
            CreateRecipeInput {
                name: payload.name,
                alt_names: payload.alt_names,
                image: payload.image,
                ingredients: payload.ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: recipe }))
}
