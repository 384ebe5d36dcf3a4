use crate::domain::recipe::entities::Ingredient;

#[derive(Debug, Clone, Default)]
pub struct GetRecipesFilter {
    pub search: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct CreateRecipeInput {
    pub name: String,
    pub alt_names: Vec<String>,
    pub image: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeInput {
    pub name: Option<String>,
    pub alt_names: Option<Vec<String>>,
    pub image: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
}
