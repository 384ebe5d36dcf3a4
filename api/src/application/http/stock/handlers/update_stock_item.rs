use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::stock::{
    entities::StockItem, ports::StockService, value_objects::UpdateStockItemInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

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
        stock::validators::UpdateStockItemValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateStockItemResponse {
    pub data: StockItem,
}

#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "stock",
    summary = "Update stock item",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("item_id" = Uuid, Path, description = "Stock item ID"),
    ),
    request_body = UpdateStockItemValidator,
    responses(
        (status = 200, body = UpdateStockItemResponse),
        (status = 404, description = "Item not found in this household")
    ),
)]
pub async fn update_stock_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<UpdateStockItemValidator>,
) -> Result<Response<UpdateStockItemResponse>, ApiError> {
    let item = state
        .service
        .update_stock_item(
            ctx.household_id,
            item_id,
            UpdateStockItemInput {
                name: payload.name,
                quantity: payload.quantity,
                unit: payload.unit,
                expiration_date: payload.expiration_date,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateStockItemResponse { data: item }))
}
