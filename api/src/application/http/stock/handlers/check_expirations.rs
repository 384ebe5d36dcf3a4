use axum::{
    Extension,
    extract::{Query, State},
};
use mealwise_core::domain::stock::{ports::StockService, value_objects::ExpirationReport};

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
    post,
    path = "/expiration-check",
    tag = "stock",
    summary = "Run expiration sweep",
    description = "Deletes expired items and lists the ones expiring within seven days.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        TodayQuery,
    ),
    responses(
        (status = 200, body = ExpirationReport)
    ),
)]
pub async fn check_expirations(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    Query(today): Query<TodayQuery>,
) -> Result<Response<ExpirationReport>, ApiError> {
    let report = state
        .service
        .check_expirations(ctx.household_id, today.resolve())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
