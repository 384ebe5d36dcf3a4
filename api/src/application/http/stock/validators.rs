use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Keeps `null` apart from an absent field: absent is `None`, `null` is `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStockItemValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Defaults to 0.
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    #[serde(default)]
    pub quantity: Option<f64>,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,

    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStockItemValidator {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    #[serde(default)]
    pub quantity: Option<f64>,

    #[validate(length(min = 1, message = "unit must not be empty"))]
    #[serde(default)]
    pub unit: Option<String>,

    /// `null` removes the date.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<NaiveDate>)]
    pub expiration_date: Option<Option<NaiveDate>>,
}

/// Reference day for expiration computations.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TodayQuery {
    /// Defaults to the current UTC date.
    pub today: Option<NaiveDate>,
}

impl TodayQuery {
    pub fn resolve(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiration_date_null_and_absent_differ() {
        let absent: UpdateStockItemValidator = serde_json::from_str(r#"{"quantity":2}"#).unwrap();
        assert_eq!(absent.expiration_date, None);

        let cleared: UpdateStockItemValidator =
            serde_json::from_str(r#"{"expiration_date":null}"#).unwrap();
        assert_eq!(cleared.expiration_date, Some(None));

        let set: UpdateStockItemValidator =
            serde_json::from_str(r#"{"expiration_date":"2025-03-14"}"#).unwrap();
        assert_eq!(
            set.expiration_date,
            Some(NaiveDate::from_ymd_opt(2025, 3, 14))
        );
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let item: CreateStockItemValidator =
            serde_json::from_str(r#"{"name":"riz","quantity":-1,"unit":"kg"}"#).unwrap();
        assert!(item.validate().is_err());

        let item: CreateStockItemValidator =
            serde_json::from_str(r#"{"name":"riz","unit":"kg"}"#).unwrap();
        assert!(item.validate().is_ok());
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn explicit_today_is_used() {
        let query = TodayQuery {
            today: NaiveDate::from_ymd_opt(2025, 3, 10),
        };
        assert_eq!(query.resolve(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }
}
