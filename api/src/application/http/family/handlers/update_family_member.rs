use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::family::{
    entities::FamilyMember, ports::FamilyService, value_objects::UpdateFamilyMemberInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        family::validators::UpdateFamilyMemberValidator,
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
pub struct UpdateFamilyMemberResponse {
    pub data: FamilyMember,
}

#[utoipa::path(
    put,
    path = "/{member_id}",
    tag = "family",
    summary = "Update family member",
    description = "Only the fields present in the body are changed.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("member_id" = Uuid, Path, description = "Family member ID"),
    ),
    request_body = UpdateFamilyMemberValidator,
    responses(
        (status = 200, body = UpdateFamilyMemberResponse),
        (status = 404, description = "Member not found in this household")
    ),
)]
pub async fn update_family_member(
    Path(member_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<UpdateFamilyMemberValidator>,
) -> Result<Response<UpdateFamilyMemberResponse>, ApiError> {
    let member = state
        .service
        .update_family_member(
            ctx.household_id,
            member_id,
            UpdateFamilyMemberInput {
                full_name: payload.full_name,
                age: payload.age,
                gender: payload.gender,
                email: payload.email,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateFamilyMemberResponse { data: member }))
}
