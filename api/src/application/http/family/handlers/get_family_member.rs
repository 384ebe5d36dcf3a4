use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::family::{entities::FamilyMember, ports::FamilyService};
use uuid::Uuid;

use crate::application::{
    household_middleware::HouseholdContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{member_id}",
    tag = "family",
    summary = "Get family member",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("member_id" = Uuid, Path, description = "Family member ID"),
    ),
    responses(
        (status = 200, body = FamilyMember),
        (status = 404, description = "Member not found in this household")
    ),
)]
pub async fn get_family_member(
    Path(member_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<FamilyMember>, ApiError> {
    let member = state
        .service
        .get_family_member(ctx.household_id, member_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(member))
}
