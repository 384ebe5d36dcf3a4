use axum::{
    Extension,
    extract::{Path, State},
};
use mealwise_core::domain::proposition::{
    entities::PropositionMessage, ports::PropositionService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        proposition::validators::PropositionMessageValidator,
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
pub struct PostPropositionMessageResponse {
    pub data: PropositionMessage,
}

#[utoipa::path(
    post,
    path = "/{proposition_id}/messages",
    tag = "proposition",
    summary = "Post a message on a proposition",
    description = "The client can always write. Once accepted, only the accepting vendor can answer.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("proposition_id" = Uuid, Path, description = "Proposition ID"),
    ),
    request_body = PropositionMessageValidator,
    responses(
        (status = 201, body = PostPropositionMessageResponse),
        (status = 400, description = "Empty message"),
        (status = 403, description = "Not part of this proposition"),
        (status = 404, description = "Proposition not found")
    ),
)]
pub async fn post_proposition_message(
    Path(proposition_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    ValidateJson(payload): ValidateJson<PropositionMessageValidator>,
) -> Result<Response<PostPropositionMessageResponse>, ApiError> {
    let message = state
        .service
        .post_proposition_message(ctx.household_id, proposition_id, payload.text)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(PostPropositionMessageResponse { data: message }))
}
