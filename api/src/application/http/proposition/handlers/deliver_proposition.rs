use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::proposition::{entities::Proposition, ports::PropositionService};
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
pub struct DeliverPropositionResponse {
    pub data: Proposition,
}

#[utoipa::path(
    post,
    path = "/{proposition_id}/deliver",
    tag = "proposition",
    summary = "Mark a proposition as delivered",
    description = "Moves an accepted proposition to LIVRÉ.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("proposition_id" = Uuid, Path, description = "Proposition ID"),
    ),
    responses(
        (status = 200, body = DeliverPropositionResponse),
        (status = 400, description = "Proposition is not in delivery"),
        (status = 403, description = "Accepted by another vendor"),
        (status = 404, description = "Proposition not found")
    ),
)]
pub async fn deliver_proposition(
    Path(proposition_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<DeliverPropositionResponse>, ApiError> {
    let proposition = state
        .service
        .deliver_proposition(ctx.household_id, proposition_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeliverPropositionResponse { data: proposition }))
}
