use axum::{Extension, extract::State};
use mealwise_core::domain::shopping_list::ports::ShoppingListService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    household_middleware::HouseholdContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearShoppingListResponse {
    pub removed: u64,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "shopping-list",
    summary = "Clear shopping list",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    responses(
        (status = 200, body = ClearShoppingListResponse)
    ),
)]
pub async fn clear_shopping_list(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<ClearShoppingListResponse>, ApiError> {
    let removed = state
        .service
        .clear_shopping_list(ctx.household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearShoppingListResponse { removed }))
}
