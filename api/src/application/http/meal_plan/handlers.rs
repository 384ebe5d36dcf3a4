pub mod assign_meal;
pub mod clear_meal;
pub mod get_meal_plan;
pub mod sync_meal_plan;
