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
pub struct GetVendorOrdersResponse {
    pub data: Vec<Proposition>,
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "proposition",
    summary = "List orders to deliver",
    description = "Propositions the calling household accepted and has not delivered yet.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
    ),
    responses(
        (status = 200, body = GetVendorOrdersResponse)
    ),
)]
pub async fn get_vendor_orders(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
) -> Result<Response<GetVendorOrdersResponse>, ApiError> {
    let propositions = state
        .service
        .get_vendor_orders(ctx.household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetVendorOrdersResponse { data: propositions }))
}
