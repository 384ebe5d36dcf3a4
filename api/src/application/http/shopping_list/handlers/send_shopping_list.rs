use axum::{Extension, extract::State};
use mealwise_core::domain::proposition::{entities::Proposition, ports::PropositionService};
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
        shopping_list::validators::SendShoppingListValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SendShoppingListResponse {
    pub data: Proposition,
}

#[utoipa::path(
    post,
    path = "/send",
    tag = "shopping-list",
    summary = "Send the shopping list to vendors",
    description = "Creates a pending proposition from every entry and empties the list.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    request_body = SendShoppingListValidator,
    responses(
        (status = 201, body = SendShoppingListResponse),
        (status = 400, description = "Shopping list is empty")
    ),
)]
pub async fn send_shopping_list(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<SendShoppingListValidator>,
) -> Result<Response<SendShoppingListResponse>, ApiError> {
    let proposition = state
        .service
        .send_shopping_list(ctx.household_id, payload.client_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SendShoppingListResponse { data: proposition }))
}
