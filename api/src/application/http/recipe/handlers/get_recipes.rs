use axum::{Extension, extract::State};
use mealwise_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GetRecipesFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    household_middleware::HouseholdContext,
    http::{
        query_extractor::QueryParamsExtractor,
        query_params::QueryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<Recipe>,
}

/// `search` wins over `filter[name]`, which is kept for older clients.
fn to_filter(query_params: &QueryParams) -> GetRecipesFilter {
    let search = query_params.search.clone().or_else(|| {
        query_params
            .filter
            .field("name")
            .map(|condition| condition.value.trim().to_string())
            .filter(|value| !value.is_empty())
    });

    GetRecipesFilter {
        search,
        offset: Some(query_params.pagination.offset),
        limit: Some(query_params.pagination.limit),
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Household recipes and public recipes, ordered by name. `search` matches the name and the alternative names.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        ("search" = Option<String>, Query, description = "Case-insensitive text search"),
        ("offset" = Option<u32>, Query, description = "Default 0"),
        ("limit" = Option<u32>, Query, description = "Default 50, at most 200"),
    ),
    responses(
        (status = 200, body = GetRecipesResponse)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_recipes(ctx.household_id, to_filter(&query_params))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data: recipes }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QueryParams::from_query_map(&map)
    }

    #[test]
    fn name_filter_is_used_as_search() {
        let filter = to_filter(&params(&[("filter[name][ilike]", "thieb")]));
        assert_eq!(filter.search.as_deref(), Some("thieb"));
        assert_eq!(filter.limit, Some(50));
    }

    #[test]
    fn search_takes_precedence() {
        let filter = to_filter(&params(&[("search", "yassa"), ("filter[name]", "mafé")]));
        assert_eq!(filter.search.as_deref(), Some("yassa"));
    }
}
