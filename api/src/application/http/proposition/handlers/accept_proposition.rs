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
pub struct AcceptPropositionResponse {
    pub data: Proposition,
}

#[utoipa::path(
    post,
    path = "/{proposition_id}/accept",
    tag = "proposition",
    summary = "Accept a proposition",
    description = "Moves a pending proposition to EN COURS DE LIVRAISON and records the vendor.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("proposition_id" = Uuid, Path, description = "Proposition ID"),
    ),
    responses(
        (status = 200, body = AcceptPropositionResponse),
        (status = 400, description = "Proposition is not pending"),
        (status = 403, description = "Own proposition"),
        (status = 404, description = "Proposition not found")
    ),
)]
pub async fn accept_proposition(
    Path(proposition_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<AcceptPropositionResponse>, ApiError> {
    let proposition = state
        .service
        .accept_proposition(ctx.household_id, proposition_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AcceptPropositionResponse { data: proposition }))
}
