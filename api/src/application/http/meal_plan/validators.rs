use chrono::{NaiveDate, Utc};
use mealwise_core::domain::planning::entities::PlanView;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MealPlanQuery {
    /// `weekly` (default) or `monthly`.
    pub view: Option<PlanView>,
    /// Any day inside the wanted week or month. Defaults to today (UTC).
    pub date: Option<NaiveDate>,
}

impl MealPlanQuery {
    pub fn reference(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignMealValidator {
    pub recipe_id: Uuid,

    /// Runs the stock pipeline. Falls back to the server default when absent.
    #[serde(default)]
    pub auto_update: Option<bool>,
}

fn validate_range(range: &SyncMealPlanValidator) -> Result<(), ValidationError> {
    if range.from > range.to {
        let mut error = ValidationError::new("range");
        error.message = Some("from must not be after to".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_range"))]
pub struct SyncMealPlanValidator {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_range_is_rejected() {
        let range: SyncMealPlanValidator =
            serde_json::from_str(r#"{"from":"2025-03-16","to":"2025-03-10"}"#).unwrap();
        assert!(range.validate().is_err());

        let range: SyncMealPlanValidator =
            serde_json::from_str(r#"{"from":"2025-03-10","to":"2025-03-10"}"#).unwrap();
        assert!(range.validate().is_ok());
    }

    #[test]
    fn query_defaults() {
        let query: MealPlanQuery = serde_urlencoded::from_str("view=monthly&date=2025-02-14").unwrap();
        assert_eq!(query.view, Some(PlanView::Monthly));
        assert_eq!(query.reference(), NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());

        let query: MealPlanQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(query.view, None);
    }
}
