use axum::{Extension, extract::State};
use mealwise_core::domain::family::{
    entities::FamilyMember, ports::FamilyService, value_objects::CreateFamilyMemberInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        family::validators::CreateFamilyMemberValidator,
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
pub struct CreateFamilyMemberResponse {
    pub data: FamilyMember,
}

#[utoipa::path(
    post,
    path = "",
    tag = "family",
    summary = "Add family member",
    description = "Adds a member to the household. Ages sent as text are read up to the first non-digit.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    request_body = CreateFamilyMemberValidator,
    responses(
        (status = 201, body = CreateFamilyMemberResponse),
        (status = 400, description = "Invalid member")
    ),
)]
pub async fn create_family_member(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<CreateFamilyMemberValidator>,
) -> Result<Response<CreateFamilyMemberResponse>, ApiError> {
    let member = state
        .service
        .create_family_member(
            ctx.household_id,
            CreateFamilyMemberInput {
                full_name: payload.full_name,
                age: payload.age,
                gender: payload.gender,
                email: payload.email,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateFamilyMemberResponse { data: member }))
}
