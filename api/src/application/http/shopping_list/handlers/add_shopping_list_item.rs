use axum::{Extension, extract::State};
use mealwise_core::domain::shopping_list::{
    entities::ShoppingListItem, ports::ShoppingListService,
    value_objects::CreateShoppingListItemInput,
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
        shopping_list::validators::AddShoppingListItemValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddShoppingListItemResponse {
    pub data: ShoppingListItem,
}

#[utoipa::path(
    post,
    path = "",
    tag = "shopping-list",
    summary = "Add shopping list entry",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    request_body = AddShoppingListItemValidator,
    responses(
        (status = 201, body = AddShoppingListItemResponse),
        (status = 400, description = "Invalid entry")
    ),
)]
pub async fn add_shopping_list_item(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<AddShoppingListItemValidator>,
) -> Result<Response<AddShoppingListItemResponse>, ApiError> {
    let item = state
        .service
        .add_shopping_list_item(
            ctx.household_id,
            CreateShoppingListItemInput {
                name: payload.name,
                quantity: payload.quantity,
                unit: payload.unit,
                price: payload.price,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddShoppingListItemResponse { data: item }))
}
