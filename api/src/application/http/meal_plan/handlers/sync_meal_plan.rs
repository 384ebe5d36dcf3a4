use axum::{Extension, extract::State};
use mealwise_core::domain::planning::{ports::PlanningService, value_objects::PlanningOutcome};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        meal_plan::validators::SyncMealPlanValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SyncMealPlanResponse {
    pub data: Vec<PlanningOutcome>,
}

#[utoipa::path(
    post,
    path = "/sync",
    tag = "meal-plan",
    summary = "Reconcile pending meals",
    description = "Runs the stock pipeline for every slot in the range not yet applied to stock, in day then meal order.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    request_body = SyncMealPlanValidator,
    responses(
        (status = 200, body = SyncMealPlanResponse),
        (status = 400, description = "Invalid range"),
        (status = 409, description = "Stock kept changing during reconciliation")
    ),
)]
pub async fn sync_meal_plan(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<SyncMealPlanValidator>,
) -> Result<Response<SyncMealPlanResponse>, ApiError> {
    let outcomes = state
        .service
        .sync_plan(ctx.household_id, payload.from, payload.to)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SyncMealPlanResponse { data: outcomes }))
}
