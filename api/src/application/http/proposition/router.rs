use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    accept_proposition::{__path_accept_proposition, accept_proposition},
    deliver_proposition::{__path_deliver_proposition, deliver_proposition},
    get_client_propositions::{__path_get_client_propositions, get_client_propositions},
    get_pending_propositions::{__path_get_pending_propositions, get_pending_propositions},
    get_vendor_orders::{__path_get_vendor_orders, get_vendor_orders},
    post_proposition_message::{__path_post_proposition_message, post_proposition_message},
};
use crate::application::{
    household_middleware::household_middleware, http::server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    get_client_propositions,
    get_pending_propositions,
    get_vendor_orders,
    accept_proposition,
    deliver_proposition,
    post_proposition_message
))]
pub struct PropositionApiDoc;

pub fn proposition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/propositions", state.args.server.root_path),
            get(get_client_propositions),
        )
        .route(
            &format!("{}/propositions/pending", state.args.server.root_path),
            get(get_pending_propositions),
        )
        .route(
            &format!("{}/propositions/orders", state.args.server.root_path),
            get(get_vendor_orders),
        )
        .route(
            &format!(
                "{}/propositions/{{proposition_id}}/accept",
                state.args.server.root_path
            ),
            post(accept_proposition),
        )
        .route(
            &format!(
                "{}/propositions/{{proposition_id}}/deliver",
                state.args.server.root_path
            ),
            post(deliver_proposition),
        )
        .route(
            &format!(
                "{}/propositions/{{proposition_id}}/messages",
                state.args.server.root_path
            ),
            post(post_proposition_message),
        )
        .layer(middleware::from_fn_with_state(state.clone(), household_middleware))
}
