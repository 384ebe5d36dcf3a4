use mealwise_core::domain::planning::reconciler::MissingIngredient;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddShoppingListItemValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,

    /// Unit price, 0 when unknown.
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ValidateShoppingListValidator {
    /// Purchased entries. Ids not on the list are ignored.
    #[serde(default)]
    pub item_ids: Vec<Uuid>,
}

fn validate_entries(entries: &[MissingIngredient]) -> Result<(), ValidationError> {
    let invalid = entries.iter().any(|entry| {
        entry.name.trim().is_empty()
            || entry.unit.trim().is_empty()
            || entry.quantity < 0.0
            || entry.price < 0.0
    });

    if invalid {
        let mut error = ValidationError::new("entries");
        error.message =
            Some("entries need a name and a unit, and no negative quantity or price".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AppendMissingValidator {
    /// Appended one row each, without merging with the current list.
    #[validate(custom(function = "validate_entries"))]
    pub entries: Vec<MissingIngredient>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendShoppingListValidator {
    /// Shown to vendors. Defaults to "Client".
    #[validate(length(max = 255, message = "client_name is too long"))]
    #[serde(default)]
    pub client_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_optional() {
        let item: AddShoppingListItemValidator =
            serde_json::from_str(r#"{"name":"sel","quantity":0.02,"unit":"kg"}"#).unwrap();
        assert!(item.validate().is_ok());
        assert_eq!(item.price, None);
    }

    #[test]
    fn missing_entries_need_a_unit() {
        let entries: AppendMissingValidator = serde_json::from_str(
            r#"{"entries":[{"name":"sel","quantity":1,"unit":"","price":0}]}"#,
        )
        .unwrap();
        assert!(entries.validate().is_err());

        let entries: AppendMissingValidator = serde_json::from_str(
            r#"{"entries":[{"name":"sel","quantity":1,"unit":"g","price":0}]}"#,
        )
        .unwrap();
        assert!(entries.validate().is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        let item: AddShoppingListItemValidator =
            serde_json::from_str(r#"{"name":"sel","quantity":1,"unit":"kg","price":-2}"#).unwrap();
        assert!(item.validate().is_err());
    }

    #[test]
    fn client_name_is_optional() {
        let send: SendShoppingListValidator = serde_json::from_str("{}").unwrap();
        assert!(send.validate().is_ok());
        assert!(send.client_name.is_none());

        let long: SendShoppingListValidator =
            serde_json::from_value(serde_json::json!({ "client_name": "a".repeat(256) })).unwrap();
        assert!(long.validate().is_err());
    }
}
