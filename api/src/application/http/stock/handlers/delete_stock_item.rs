use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::stock::ports::StockService;
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
pub struct DeleteStockItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "stock",
    summary = "Delete stock item",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("item_id" = Uuid, Path, description = "Stock item ID"),
    ),
    responses(
        (status = 200, body = DeleteStockItemResponse),
        (status = 404, description = "Item not found in this household")
    ),
)]
pub async fn delete_stock_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<DeleteStockItemResponse>, ApiError> {
    state
        .service
        .delete_stock_item(ctx.household_id, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteStockItemResponse {
        message: "Stock item deleted successfully".to_string(),
    }))
}
