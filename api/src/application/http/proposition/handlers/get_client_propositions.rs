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
pub struct GetClientPropositionsResponse {
    pub data: Vec<Proposition>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "proposition",
    summary = "List the household's propositions",
    description = "Newest first, with their message threads.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    responses(
        (status = 200, body = GetClientPropositionsResponse)
    ),
)]
pub async fn get_client_propositions(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<GetClientPropositionsResponse>, ApiError> {
    let propositions = state
        .service
        .get_client_propositions(ctx.household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetClientPropositionsResponse { data: propositions }))
}
