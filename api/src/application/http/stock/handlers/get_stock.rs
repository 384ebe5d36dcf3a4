use axum::{
    Extension,
    extract::{Query, State},
};
use mealwise_core::domain::stock::{
    expiration::ExpirationStatus, ports::StockService, value_objects::StockItemView,
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
        stock::validators::TodayQuery,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetStockResponse {
    pub data: Vec<StockItemView>,
}

fn parse_status(value: &str) -> Result<ExpirationStatus, ApiError> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_uppercase()))
        .map_err(|_| ApiError::BadRequest(format!("unknown expiration status: {value}")))
}

fn apply_filters(
    items: Vec<StockItemView>,
    query_params: &QueryParams,
) -> Result<Vec<StockItemView>, ApiError> {
    let status = query_params
        .filter
        .field("expiration_status")
        .map(|condition| parse_status(&condition.value))
        .transpose()?;
    let name = query_params.filter.field("name");

    Ok(items
        .into_iter()
        .filter(|view| status.is_none() || view.expiration_status == status)
        .filter(|view| name.is_none_or(|condition| condition.matches(&view.item.name)))
        .collect())
}

#[utoipa::path(
    get,
    path = "",
    tag = "stock",
    summary = "List stock",
    description = "Stock items with their expiration status. Supports `filter[expiration_status]` and `filter[name][ilike]`.",
    params(
        ("x-owner-id" = String, Header, description = "Household owner reference"),
        TodayQuery,
    ),
    responses(
        (status = 200, body = GetStockResponse),
        (status = 400, description = "Unknown expiration status")
    ),
)]
pub async fn get_stock(
    State(state): State<AppState>,
    Extension(ctx): Extension<HouseholdContext>,
    Query(today): Query<TodayQuery>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetStockResponse>, ApiError> {
    let items = state
        .service
        .get_stock(ctx.household_id, today.resolve())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetStockResponse {
        data: apply_filters(items, &query_params)?,
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;
    use mealwise_core::domain::stock::entities::{StockItem, StockItemConfig};
    use uuid::Uuid;

    use super::*;

    fn view(name: &str, status: Option<ExpirationStatus>) -> StockItemView {
        StockItemView {
            item: StockItem::new(StockItemConfig {
                household_id: Uuid::new_v4(),
                name: name.to_string(),
                quantity: 1.0,
                unit: "kg".to_string(),
                expiration_date: NaiveDate::from_ymd_opt(2025, 3, 12),
            }),
            expiration_status: status,
        }
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QueryParams::from_query_map(&map)
    }

    #[test]
    fn filters_by_status_and_name() {
        let items = vec![
            view("riz", Some(ExpirationStatus::Soon)),
            view("oignon", Some(ExpirationStatus::Imminent)),
            view("riz brisé", Some(ExpirationStatus::Imminent)),
            view("sel", None),
        ];

        let filtered = apply_filters(
            items,
            &params(&[("filter[expiration_status]", "imminent"), ("filter[name][ilike]", "RIZ")]),
        )
        .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].item.name, "riz brisé");
    }

    #[test]
    fn unknown_status_is_a_bad_request() {
        let result = apply_filters(vec![], &params(&[("filter[expiration_status]", "stale")]));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
