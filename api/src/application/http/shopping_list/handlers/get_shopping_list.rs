use axum::{Extension, extract::State};
use mealwise_core::domain::shopping_list::{
    ports::ShoppingListService, value_objects::ShoppingList,
};

use crate::application::{
    household_middleware::HouseholdContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "shopping-list",
    summary = "Get shopping list",
    description = "Entries in insertion order with the total cost (quantity times price, two decimals).",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    responses(
        (status = 200, body = ShoppingList)
    ),
)]
pub async fn get_shopping_list(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<ShoppingList>, ApiError> {
    let list = state
        .service
        .get_shopping_list(ctx.household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(list))
}
