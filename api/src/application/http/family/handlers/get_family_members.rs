use axum::{Extension, extract::State};
use mealwise_core::domain::family::{entities::FamilyMember, ports::FamilyService};
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
pub struct GetFamilyMembersResponse {
    pub data: Vec<FamilyMember>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "family",
    summary = "List family members",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    responses(
        (status = 200, body = GetFamilyMembersResponse)
    ),
)]
pub async fn get_family_members(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<GetFamilyMembersResponse>, ApiError> {
    let members = state
        .service
        .get_family_members(ctx.household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFamilyMembersResponse { data: members }))
}
