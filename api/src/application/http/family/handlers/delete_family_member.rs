use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::family::ports::FamilyService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    household_middleware::HouseholdContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteFamilyMemberResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{member_id}",
    tag = "family",
    summary = "Remove family member",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("member_id" = Uuid, Path, description = "Family member ID"),
    ),
    responses(
        (status = 200, body = DeleteFamilyMemberResponse),
        (status = 404, description = "Member not found in this household")
    ),
)]
pub async fn delete_family_member(
    Path(member_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<DeleteFamilyMemberResponse>, ApiError> {
    state
        .service
        .delete_family_member(ctx.household_id, member_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteFamilyMemberResponse {
        message: "Family member deleted successfully".to_string(),
    }))
}
