use axum::{Extension, extract::State};
use mealwise_core::domain::shopping_list::{
    ports::ShoppingListService, value_objects::ValidatedShoppingList,
};

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
        shopping_list::validators::ValidateShoppingListValidator,
    },
};

#[utoipa::path(
    post,
    path = "/validate",
    tag = "shopping-list",
    summary = "Validate purchases",
    description = "Moves the selected entries into stock, without expiration date, and removes them from the list.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    request_body = ValidateShoppingListValidator,
    responses(
        (status = 200, body = ValidatedShoppingList)
    ),
)]
pub async fn validate_shopping_list(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<ValidateShoppingListValidator>,
) -> Result<Response<ValidatedShoppingList>, ApiError> {
    let validated = state
        .service
        .validate_shopping_list(ctx.household_id, payload.item_ids)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(validated))
}
