pub mod add_recipe_comment;
pub mod create_recipe;
pub mod delete_recipe;
pub mod get_recipe;
pub mod get_recipe_comments;
pub mod get_recipes;
pub mod save_recipe;
pub mod set_recipe_visibility;
pub mod toggle_recipe_like;
pub mod update_recipe;
