use utoipa::OpenApi;

use crate::application::http::{
    family::router::FamilyApiDoc, health::router::HealthApiDoc, meal_plan::router::MealPlanApiDoc,
    proposition::router::PropositionApiDoc, recipe::router::RecipeApiDoc,
    shopping_list::router::ShoppingListApiDoc, stock::router::StockApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealwise API"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/family-members", api = FamilyApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/stock", api = StockApiDoc),
        (path = "/shopping-list", api = ShoppingListApiDoc),
        (path = "/meal-plan", api = MealPlanApiDoc),
        (path = "/propositions", api = PropositionApiDoc),
    )
)]
pub struct ApiDoc;
