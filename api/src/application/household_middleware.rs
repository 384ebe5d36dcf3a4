use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use mealwise_core::domain::household::ports::HouseholdService;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub const OWNER_HEADER: &str = "x-owner-id";

/// Household the request acts on, stored in request extensions.
#[derive(Clone, Debug)]
pub struct HouseholdContext {
    pub household_id: Uuid,
}

/// Resolves the `x-owner-id` header to a household, creating it on first use.
pub async fn household_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let owner_ref = req
        .headers()
        .get(OWNER_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let household = state
        .service
        .get_or_create_household(&owner_ref)
        .await
        .map_err(ApiError::from)?;

    req.extensions_mut().insert(HouseholdContext {
        household_id: household.id,
    });

    Ok(next.run(req).await)
}
