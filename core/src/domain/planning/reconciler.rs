//! Reconciles a recipe against the household stock.
//!
//! The reconciler is pure: it reads a stock snapshot and returns the writes to make. Each
//! usable ingredient is scaled by the family coefficient and taken from the matching stock
//! row (lower-cased name, exact unit). Whatever the stock cannot cover becomes a missing
//! entry. Deductions are applied to a working copy, so two ingredients drawing on the same
//! row see each other's consumption.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{recipe::entities::Ingredient, stock::entities::StockItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockDeduction {
    pub stock_item_id: Uuid,
    /// Version of the row in the snapshot the deduction was computed from.
    pub expected_version: i32,
    pub new_quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MissingIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Reconciliation {
    pub deductions: Vec<StockDeduction>,
    pub missing: Vec<MissingIngredient>,
}

impl Reconciliation {
    pub fn is_empty(&self) -> bool {
        self.deductions.is_empty() && self.missing.is_empty()
    }
}

struct WorkingRow<'a> {
    item: &'a StockItem,
    quantity: f64,
    touched: Option<usize>,
}

pub fn reconcile(
    ingredients: &[Ingredient],
    coefficient: f64,
    stock: &[StockItem],
) -> Reconciliation {
    let mut rows: Vec<WorkingRow<'_>> = stock
        .iter()
        .map(|item| WorkingRow {
            item,
            quantity: item.quantity,
            touched: None,
        })
        .collect();

    let mut reconciliation = Reconciliation::default();

    for ingredient in ingredients {
        let Some(quantity) = ingredient.usable_quantity() else {
            continue;
        };
        let required = quantity * coefficient;
        let price = ingredient.price.unwrap_or(0.0);

        let Some(row) = rows
            .iter_mut()
            .find(|row| row.item.matches(&ingredient.name, &ingredient.unit))
        else {
            reconciliation.missing.push(MissingIngredient {
                name: ingredient.name.clone(),
                quantity: required,
                unit: ingredient.unit.clone(),
                price,
            });
            continue;
        };

        let available = row.quantity;
        if available >= required {
            row.quantity = available - required;
        } else {
            row.quantity = 0.0;
            reconciliation.missing.push(MissingIngredient {
                name: ingredient.name.clone(),
                quantity: required - available,
                unit: ingredient.unit.clone(),
                price,
            });
        }

        let deduction = StockDeduction {
            stock_item_id: row.item.id,
            expected_version: row.item.version,
            new_quantity: row.quantity,
        };
        match row.touched {
            Some(index) => reconciliation.deductions[index] = deduction,
            None => {
                row.touched = Some(reconciliation.deductions.len());
                reconciliation.deductions.push(deduction);
            }
        }
    }

    reconciliation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stock::entities::StockItemConfig;

    fn stock(name: &str, quantity: f64, unit: &str) -> StockItem {
        StockItem::new(StockItemConfig {
            household_id: Uuid::nil(),
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            expiration_date: None,
        })
    }

    fn ingredient(name: &str, quantity: f64, unit: &str, price: Option<f64>) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            quantity: Some(quantity),
            unit: unit.to_string(),
            price,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn enough_stock_is_deducted_and_nothing_is_missing() {
        let riz = stock("riz", 2.0, "kg");
        let result = reconcile(&[ingredient("Riz", 0.5, "kg", None)], 2.0, &[riz.clone()]);

        assert!(result.missing.is_empty());
        assert_eq!(result.deductions.len(), 1);
        assert_eq!(result.deductions[0].stock_item_id, riz.id);
        assert_eq!(result.deductions[0].expected_version, riz.version);
        assert!(approx(result.deductions[0].new_quantity, 1.0));
    }

    #[test]
    fn short_stock_is_emptied_and_the_rest_is_missing() {
        let riz = stock("riz", 0.3, "kg");
        let result = reconcile(
            &[ingredient("riz", 0.5, "kg", Some(1.2))],
            1.0,
            &[riz.clone()],
        );

        assert_eq!(result.deductions.len(), 1);
        assert_eq!(result.deductions[0].new_quantity, 0.0);
        assert_eq!(result.missing.len(), 1);
        assert!(approx(result.missing[0].quantity, 0.2));
        assert_eq!(result.missing[0].price, 1.2);
        assert_eq!(result.missing[0].unit, "kg");
    }

    #[test]
    fn unmatched_ingredient_is_missing_with_zero_price() {
        let result = reconcile(&[ingredient("sel", 0.01, "kg", None)], 2.0, &[]);

        assert!(result.deductions.is_empty());
        assert_eq!(
            result.missing,
            vec![MissingIngredient {
                name: "sel".to_string(),
                quantity: 0.02,
                unit: "kg".to_string(),
                price: 0.0,
            }]
        );
    }

    #[test]
    fn unit_must_match_exactly() {
        let result = reconcile(
            &[ingredient("riz", 500.0, "g", None)],
            1.0,
            &[stock("riz", 2.0, "kg")],
        );

        assert!(result.deductions.is_empty());
        assert_eq!(result.missing.len(), 1);
        assert_eq!(result.missing[0].quantity, 500.0);
    }

    #[test]
    fn unusable_ingredients_are_skipped() {
        let ingredients = vec![
            ingredient("", 1.0, "kg", None),
            ingredient("riz", 1.0, "", None),
            ingredient("riz", 0.0, "kg", None),
            Ingredient {
                name: "riz".to_string(),
                quantity: None,
                unit: "kg".to_string(),
                price: None,
            },
        ];

        let result = reconcile(&ingredients, 1.0, &[stock("riz", 2.0, "kg")]);
        assert!(result.is_empty());
    }

    #[test]
    fn deduction_never_exceeds_available_stock() {
        let riz = stock("riz", 1.0, "kg");
        for required in [0.25, 1.0, 1.5, 4.0] {
            let result = reconcile(&[ingredient("riz", required, "kg", None)], 1.0, &[riz.clone()]);

            let taken = riz.quantity - result.deductions[0].new_quantity;
            let missing: f64 = result.missing.iter().map(|m| m.quantity).sum();
            assert!(taken <= riz.quantity);
            assert!(result.deductions[0].new_quantity >= 0.0);
            assert!(approx(taken + missing, required));
            assert_eq!(result.missing.is_empty(), riz.quantity >= required);
        }
    }

    #[test]
    fn repeated_ingredient_sees_the_reduced_quantity() {
        let riz = stock("riz", 1.0, "kg");
        let result = reconcile(
            &[
                ingredient("riz", 0.75, "kg", None),
                ingredient("RIZ", 0.75, "kg", None),
            ],
            1.0,
            &[riz.clone()],
        );

        assert_eq!(result.deductions.len(), 1);
        assert_eq!(result.deductions[0].new_quantity, 0.0);
        assert_eq!(result.missing.len(), 1);
        assert!(approx(result.missing[0].quantity, 0.5));
    }

    #[test]
    fn riz_stock_of_two_covers_one() {
        let riz = stock("riz", 2.0, "kg");
        let result = reconcile(&[ingredient("Riz", 1.0, "kg", None)], 1.0, &[riz.clone()]);

        assert_eq!(
            result.deductions,
            vec![StockDeduction {
                stock_item_id: riz.id,
                expected_version: riz.version,
                new_quantity: 1.0,
            }]
        );
        assert!(result.missing.is_empty());
    }

    #[test]
    fn riz_stock_of_two_leaves_one_missing_out_of_three() {
        let result = reconcile(
            &[ingredient("riz", 3.0, "kg", None)],
            1.0,
            &[stock("riz", 2.0, "kg")],
        );

        assert_eq!(result.deductions[0].new_quantity, 0.0);
        assert_eq!(
            result.missing,
            vec![MissingIngredient {
                name: "riz".to_string(),
                quantity: 1.0,
                unit: "kg".to_string(),
                price: 0.0,
            }]
        );
    }

    #[test]
    fn sel_without_stock_is_missing_in_grams() {
        let result = reconcile(&[ingredient("sel", 1.0, "g", None)], 1.0, &[]);

        assert!(result.deductions.is_empty());
        assert_eq!(
            result.missing,
            vec![MissingIngredient {
                name: "sel".to_string(),
                quantity: 1.0,
                unit: "g".to_string(),
                price: 0.0,
            }]
        );
    }

    #[test]
    fn nameless_ingredient_produces_nothing() {
        let result = reconcile(
            &[ingredient("", 1.0, "kg", None)],
            1.0,
            &[stock("riz", 2.0, "kg")],
        );

        assert!(result.deductions.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn negative_quantity_never_adds_to_stock() {
        let result = reconcile(
            &[ingredient("riz", -1.0, "kg", None)],
            1.0,
            &[stock("riz", 2.0, "kg")],
        );

        assert!(result.is_empty());
    }

    #[test]
    fn zero_coefficient_takes_nothing() {
        let result = reconcile(
            &[ingredient("riz", 0.5, "kg", None)],
            0.0,
            &[stock("riz", 1.0, "kg")],
        );

        assert!(result.missing.is_empty());
        assert_eq!(result.deductions[0].new_quantity, 1.0);
    }
}
