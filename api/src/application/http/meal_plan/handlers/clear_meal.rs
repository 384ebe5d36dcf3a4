use axum::{
    Extension,
    extract::{Path, State},
};
use chrono::NaiveDate;
use mealwise_core::domain::planning::{entities::MealType, ports::PlanningService};
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
pub struct ClearMealResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{day}/{meal_type}",
    tag = "meal-plan",
    summary = "Clear meal",
    description = "Empties the slot. Stock already deducted is not restored.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("day" = NaiveDate, Path, description = "Day, YYYY-MM-DD"),
        ("meal_type" = MealType, Path, description = "breakfast, lunch or dinner"),
    ),
    responses(
        (status = 200, body = ClearMealResponse),
        (status = 404, description = "Slot is empty")
    ),
)]
pub async fn clear_meal(
    Path((day, meal_type)): Path<(NaiveDate, MealType)>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<ClearMealResponse>, ApiError> {
    state
        .service
        .clear_meal(ctx.household_id, day, meal_type)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearMealResponse {
        message: "Meal cleared successfully".to_string(),
    }))
}
