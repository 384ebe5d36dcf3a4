use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    add_recipe_comment::{__path_add_recipe_comment, add_recipe_comment},
    create_recipe::{__path_create_recipe, create_recipe},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipe_comments::{__path_get_recipe_comments, get_recipe_comments},
    get_recipes::{__path_get_recipes, get_recipes},
    save_recipe::{__path_save_recipe, save_recipe},
    set_recipe_visibility::{__path_set_recipe_visibility, set_recipe_visibility},
    toggle_recipe_like::{__path_toggle_recipe_like, toggle_recipe_like},
    update_recipe::{__path_update_recipe, update_recipe},
};
use crate::application::{
    household_middleware::household_middleware, http::server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    get_recipes,
    get_recipe,
    create_recipe,
    update_recipe,
    delete_recipe,
    set_recipe_visibility,
    save_recipe,
    toggle_recipe_like,
    get_recipe_comments,
    add_recipe_comment
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            get(get_recipes),
        )
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            post(create_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            get(get_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            put(update_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            delete(delete_recipe),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/visibility",
                state.args.server.root_path
            ),
            put(set_recipe_visibility),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/save", state.args.server.root_path),
            post(save_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/like", state.args.server.root_path),
            post(toggle_recipe_like),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/comments", state.args.server.root_path),
            get(get_recipe_comments),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/comments", state.args.server.root_path),
            post(add_recipe_comment),
        )
        .layer(middleware::from_fn_with_state(state.clone(), household_middleware))
}
