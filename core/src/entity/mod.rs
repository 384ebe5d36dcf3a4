pub mod family_members;
pub mod households;
pub mod meal_slots;
pub mod proposition_messages;
pub mod propositions;
pub mod recipe_comments;
pub mod recipe_ingredients;
pub mod recipe_likes;
pub mod recipes;
pub mod shopping_list_items;
pub mod stock_items;
