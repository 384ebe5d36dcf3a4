use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_family_member::{__path_create_family_member, create_family_member},
    delete_family_member::{__path_delete_family_member, delete_family_member},
    get_family_coefficient::{__path_get_family_coefficient, get_family_coefficient},
    get_family_member::{__path_get_family_member, get_family_member},
    get_family_members::{__path_get_family_members, get_family_members},
    update_family_member::{__path_update_family_member, update_family_member},
};
use crate::application::{
    household_middleware::household_middleware, http::server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    get_family_members,
    get_family_member,
    create_family_member,
    update_family_member,
    delete_family_member,
    get_family_coefficient
))]
pub struct FamilyApiDoc;

pub fn family_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/family-members", state.args.server.root_path),
            get(get_family_members),
        )
        .route(
            &format!("{}/family-members", state.args.server.root_path),
            post(create_family_member),
        )
        .route(
            &format!("{}/family-members/coefficient", state.args.server.root_path),
            get(get_family_coefficient),
        )
        .route(
            &format!("{}/family-members/{{member_id}}", state.args.server.root_path),
            get(get_family_member),
        )
        .route(
            &format!("{}/family-members/{{member_id}}", state.args.server.root_path),
            put(update_family_member),
        )
        .route(
            &format!("{}/family-members/{{member_id}}", state.args.server.root_path),
            delete(delete_family_member),
        )
        .layer(middleware::from_fn_with_state(state.clone(), household_middleware))
}
