use axum::{Extension, extract::State};
use mealwise_core::domain::proposition::{entities::Proposition, ports::PropositionService};
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
pub struct GetPendingPropositionsResponse {
    pub data: Vec<Proposition>,
}

#[utoipa::path(
    get,
    path = "/pending",
    tag = "proposition",
    summary = "List propositions waiting for a vendor",
    description = "Pending propositions of other households, oldest first.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    responses(
        (status = 200, body = GetPendingPropositionsResponse)
    ),
)]
pub async fn get_pending_propositions(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<GetPendingPropositionsResponse>, ApiError> {
    let propositions = state
        .service
        .get_pending_propositions(ctx.household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPendingPropositionsResponse { data: propositions }))
}
