use axum::{
    Extension,
    extract::{Query, State},
};
use mealwise_core::domain::planning::{ports::PlanningService, value_objects::MealPlan};

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        meal_plan::validators::MealPlanQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "meal-plan",
    summary = "Get meal plan",
    description = "Day grid of the week (Monday to Sunday) or month containing `date`.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        MealPlanQuery,
    ),
    responses(
        (status = 200, body = MealPlan)
    ),
)]
pub async fn get_meal_plan(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    Query(query): Query<MealPlanQuery>,
) -> Result<Response<MealPlan>, ApiError> {
    let plan = state
        .service
        .get_plan(
            ctx.household_id,
            query.view.unwrap_or_default(),
            query.reference(),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
