use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_shopping_list_item::{__path_add_shopping_list_item, add_shopping_list_item},
    append_missing::{__path_append_missing, append_missing},
    clear_shopping_list::{__path_clear_shopping_list, clear_shopping_list},
    delete_shopping_list_item::{__path_delete_shopping_list_item, delete_shopping_list_item},
    get_shopping_list::{__path_get_shopping_list, get_shopping_list},
    send_shopping_list::{__path_send_shopping_list, send_shopping_list},
    validate_shopping_list::{__path_validate_shopping_list, validate_shopping_list},
};
use crate::application::{
    household_middleware::household_middleware, http::server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    get_shopping_list,
    add_shopping_list_item,
    append_missing,
    clear_shopping_list,
    delete_shopping_list_item,
    validate_shopping_list,
    send_shopping_list
))]
pub struct ShoppingListApiDoc;

pub fn shopping_list_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/shopping-list", state.args.server.root_path),
            get(get_shopping_list),
        )
        .route(
            &format!("{}/shopping-list", state.args.server.root_path),
            post(add_shopping_list_item),
        )
        .route(
            &format!("{}/shopping-list", state.args.server.root_path),
            delete(clear_shopping_list),
        )
        .route(
            &format!("{}/shopping-list/missing", state.args.server.root_path),
            post(append_missing),
        )
        .route(
            &format!("{}/shopping-list/validate", state.args.server.root_path),
            post(validate_shopping_list),
        )
        .route(
            &format!("{}/shopping-list/send", state.args.server.root_path),
            post(send_shopping_list),
        )
        .route(
            &format!("{}/shopping-list/{{item_id}}", state.args.server.root_path),
            delete(delete_shopping_list_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), household_middleware))
}
