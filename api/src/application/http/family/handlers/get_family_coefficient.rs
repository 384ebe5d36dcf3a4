use axum::{Extension, extract::State};
use mealwise_core::domain::family::ports::FamilyService;
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
pub struct FamilyCoefficientResponse {
    /// Adult portions eaten by the household, two decimals.
    pub coefficient: f64,
}

#[utoipa::path(
    get,
    path = "/coefficient",
    tag = "family",
    summary = "Household consumption coefficient",
    description = "Multiplier applied to recipe quantities, computed from the current members.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    responses(
        (status = 200, body = FamilyCoefficientResponse)
    ),
)]
pub async fn get_family_coefficient(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<FamilyCoefficientResponse>, ApiError> {
    let coefficient = state
        .service
        .get_family_coefficient(ctx.household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FamilyCoefficientResponse { coefficient }))
}
