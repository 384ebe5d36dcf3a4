use axum::{
    Extension,
    extract::{Path, Query, State},
};
use mealwise_core::domain::stock::{ports::StockService, value_objects::StockItemView};
use uuid::Uuid;

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        stock::validators::TodayQuery,
    },
};

#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "stock",
    summary = "Get stock item",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("item_id" = Uuid, Path, description = "Stock item ID"),
        TodayQuery,
    ),
    responses(
        (status = 200, body = StockItemView),
        (status = 404, description = "Item not found in this household")
    ),
)]
pub async fn get_stock_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    Query(today): Query<TodayQuery>,
) -> Result<Response<StockItemView>, ApiError> {
    let item = state
        .service
        .get_stock_item(ctx.household_id, item_id, today.resolve())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(item))
}
