use axum::{Extension, extract::State};
use mealwise_core::domain::stock::{
    entities::StockItem, ports::StockService, value_objects::CreateStockItemInput,
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
        stock::validators::CreateStockItemValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateStockItemResponse {
    pub data: StockItem,
}

#[utoipa::path(
    post,
    path = "",
    tag = "stock",
    summary = "Add stock item",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    request_body = CreateStockItemValidator,
    responses(
        (status = 201, body = CreateStockItemResponse),
        (status = 400, description = "Invalid item")
    ),
)]
pub async fn create_stock_item(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<CreateStockItemValidator>,
) -> Result<Response<CreateStockItemResponse>, ApiError> {
    let item = state
        .service
        .create_stock_item(
            ctx.household_id,
            CreateStockItemInput {
                name: payload.name,
                quantity: payload.quantity,
                unit: payload.unit,
                expiration_date: payload.expiration_date,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateStockItemResponse { data: item }))
}
