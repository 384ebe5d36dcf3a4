use axum::{Extension, extract::State};
use mealwise_core::domain::shopping_list::{
    entities::ShoppingListItem, ports::ShoppingListService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        shopping_list::validators::AppendMissingValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AppendMissingResponse {
    pub data: Vec<ShoppingListItem>,
}

#[utoipa::path(
    post,
    path = "/missing",
    tag = "shopping-list",
    summary = "Append missing ingredients",
    description = "Adds one entry per missing ingredient. Sending the same entries twice lists them twice.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    request_body = AppendMissingValidator,
    responses(
        (status = 201, body = AppendMissingResponse),
        (status = 400, description = "Invalid entries")
    ),
)]
pub async fn append_missing(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<AppendMissingValidator>,
) -> Result<Response<AppendMissingResponse>, ApiError> {
    let items = state
        .service
        .append_missing(ctx.household_id, payload.entries)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AppendMissingResponse { data: items }))
}
