use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::shopping_list::ports::ShoppingListService;
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
pub struct DeleteShoppingListItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "shopping-list",
    summary = "Delete shopping list entry",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("item_id" = Uuid, Path, description = "Shopping list entry ID"),
    ),
    responses(
        (status = 200, body = DeleteShoppingListItemResponse),
        (status = 404, description = "Entry not found in this household")
    ),
)]
pub async fn delete_shopping_list_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<DeleteShoppingListItemResponse>, ApiError> {
    state
        .service
        .delete_shopping_list_item(ctx.household_id, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteShoppingListItemResponse {
        message: "Shopping list entry deleted successfully".to_string(),
    }))
}
