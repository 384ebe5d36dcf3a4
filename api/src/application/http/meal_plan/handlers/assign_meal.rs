use axum::{
    Extension,
    extract::{Path, State},
};
use chrono::NaiveDate;
use mealwise_core::domain::planning::{
    entities::MealType,
    ports::PlanningService,
    value_objects::{AssignMealInput, PlanningOutcome},
};
use tracing::info;

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        meal_plan::validators::AssignMealValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/{day}/{meal_type}",
    tag = "meal-plan",
    summary = "Assign meal",
    description = "Saves the recipe in the slot. With `auto_update`, deducts the household portions from stock and appends what is missing to the shopping list.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("day" = NaiveDate, Path, description = "Day, YYYY-MM-DD"),
        ("meal_type" = MealType, Path, description = "breakfast, lunch or dinner"),
    ),
    request_body = AssignMealValidator,
    responses(
        (status = 200, body = PlanningOutcome),
        (status = 404, description = "Recipe not visible to this household"),
        (status = 409, description = "Stock kept changing during reconciliation")
    ),
)]
pub async fn assign_meal(
    Path((day, meal_type)): Path<(NaiveDate, MealType)>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<AssignMealValidator>,
) -> Result<Response<PlanningOutcome>, ApiError> {
    let outcome = state
        .service
        .assign_meal(
            ctx.household_id,
            AssignMealInput {
                day,
                meal_type,
                recipe_id: payload.recipe_id,
                auto_update: payload.auto_update,
            },
        )
        .await
        .map_err(ApiError::from)?;

    info!(
        household_id = %ctx.household_id,
        day = %day,
        meal_type = %meal_type,
        deductions = outcome.deductions.len(),
        missing = outcome.missing.len(),
        "Meal assigned"
    );

    Ok(Response::OK(outcome))
}
