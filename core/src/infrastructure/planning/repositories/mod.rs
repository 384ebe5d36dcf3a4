pub mod meal_plan_repository;
pub mod reconciliation_repository;
