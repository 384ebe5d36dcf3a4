use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    check_expirations::{__path_check_expirations, check_expirations},
    create_stock_item::{__path_create_stock_item, create_stock_item},
    delete_stock_item::{__path_delete_stock_item, delete_stock_item},
    get_stock::{__path_get_stock, get_stock},
    get_stock_item::{__path_get_stock_item, get_stock_item},
    update_stock_item::{__path_update_stock_item, update_stock_item},
};
use crate::application::{
    household_middleware::household_middleware, http::server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    get_stock,
    get_stock_item,
    create_stock_item,
    update_stock_item,
    delete_stock_item,
    check_expirations
))]
pub struct StockApiDoc;

pub fn stock_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/stock", state.args.server.root_path),
            get(get_stock),
        )
        .route(
            &format!("{}/stock", state.args.server.root_path),
            post(create_stock_item),
        )
        .route(
            &format!("{}/stock/expiration-check", state.args.server.root_path),
            post(check_expirations),
        )
        .route(
            &format!("{}/stock/{{item_id}}", state.args.server.root_path),
            get(get_stock_item),
        )
        .route(
            &format!("{}/stock/{{item_id}}", state.args.server.root_path),
            put(update_stock_item),
        )
        .route(
            &format!("{}/stock/{{item_id}}", state.args.server.root_path),
            delete(delete_stock_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), household_middleware))
}
