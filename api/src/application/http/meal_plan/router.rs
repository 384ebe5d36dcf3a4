use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    assign_meal::{__path_assign_meal, assign_meal},
    clear_meal::{__path_clear_meal, clear_meal},
    get_meal_plan::{__path_get_meal_plan, get_meal_plan},
    sync_meal_plan::{__path_sync_meal_plan, sync_meal_plan},
};
use crate::application::{
    household_middleware::household_middleware, http::server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(get_meal_plan, assign_meal, clear_meal, sync_meal_plan))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meal-plan", state.args.server.root_path),
            get(get_meal_plan),
        )
        .route(
            &format!("{}/meal-plan/sync", state.args.server.root_path),
            post(sync_meal_plan),
        )
        .route(
            &format!("{}/meal-plan/{{day}}/{{meal_type}}", state.args.server.root_path),
            put(assign_meal),
        )
        .route(
            &format!("{}/meal-plan/{{day}}/{{meal_type}}", state.args.server.root_path),
            delete(clear_meal),
        )
        .layer(middleware::from_fn_with_state(state.clone(), household_middleware))
}
