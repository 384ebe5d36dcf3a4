use chrono::NaiveDate;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    family::ports::FamilyMemberRepository,
    health::ports::HealthCheckRepository,
    household::ports::HouseholdRepository,
    planning::ports::{MealPlanRepository, ReconciliationRepository},
    proposition::ports::PropositionRepository,
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
    stock::{
        entities::{StockItem, StockItemConfig},
        expiration::{ExpirationStatus, days_until, expiration_status},
        ports::{StockRepository, StockService},
        value_objects::{
            CreateStockItemInput, ExpirationAlert, ExpirationReport, StockItemView,
            UpdateStockItemInput,
        },
    },
};

fn ensure_valid_stock(
    name: Option<&str>,
    quantity: Option<f64>,
    unit: Option<&str>,
) -> Result<(), CoreError> {
    if name.is_some_and(|n| n.trim().is_empty()) {
        return Err(CoreError::Invalid("name is required".to_string()));
    }
    if unit.is_some_and(|u| u.trim().is_empty()) {
        return Err(CoreError::Invalid("unit is required".to_string()));
    }
    if quantity.is_some_and(|q| q < 0.0 || q.is_nan()) {
        return Err(CoreError::Invalid("quantity must not be negative".to_string()));
    }
    Ok(())
}

fn to_view(item: StockItem, today: NaiveDate) -> StockItemView {
    let expiration_status = expiration_status(item.expiration_date, today);
    StockItemView {
        item,
        expiration_status,
    }
}

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> StockService
    for Service<HH, FM, RC, ST, SL, MP, RR, PR, HC>
where
    HH: HouseholdRepository,
    FM: FamilyMemberRepository,
    RC: RecipeRepository,
    ST: StockRepository,
    SL: ShoppingListRepository,
    MP: MealPlanRepository,
    RR: ReconciliationRepository,
    PR: PropositionRepository,
    HC: HealthCheckRepository,
{
    async fn get_stock(
        &self,
        household_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<StockItemView>, CoreError> {
        let items = self.stock_repository.list_by_household(household_id).await?;

        Ok(items.into_iter().map(|item| to_view(item, today)).collect())
    }

    async fn get_stock_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
        today: NaiveDate,
    ) -> Result<StockItemView, CoreError> {
        self.stock_repository
            .get_by_id(item_id, household_id)
            .await?
            .map(|item| to_view(item, today))
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(household_id = %household_id))]
    async fn create_stock_item(
        &self,
        household_id: Uuid,
        input: CreateStockItemInput,
    ) -> Result<StockItem, CoreError> {
        ensure_valid_stock(Some(&input.name), input.quantity, Some(&input.unit))?;

        let item = StockItem::new(StockItemConfig {
            household_id,
            name: input.name,
            quantity: input.quantity.unwrap_or(0.0),
            unit: input.unit,
            expiration_date: input.expiration_date,
        });

        let _guard = self.locks.acquire(household_id).await;
        self.stock_repository.create(item).await
    }

    #[instrument(skip(self, input), fields(household_id = %household_id, item_id = %item_id))]
    async fn update_stock_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
        input: UpdateStockItemInput,
    ) -> Result<StockItem, CoreError> {
        ensure_valid_stock(input.name.as_deref(), input.quantity, input.unit.as_deref())?;

        let _guard = self.locks.acquire(household_id).await;

        let mut item = self
            .stock_repository
            .get_by_id(item_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        item.update(input.name, input.quantity, input.unit, input.expiration_date);

        self.stock_repository.update(item).await
    }

    async fn delete_stock_item(&self, household_id: Uuid, item_id: Uuid) -> Result<(), CoreError> {
        let _guard = self.locks.acquire(household_id).await;

        self.stock_repository
            .get_by_id(item_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.stock_repository.delete(item_id, household_id).await
    }

    #[instrument(skip(self), fields(household_id = %household_id, today = %today))]
    async fn check_expirations(
        &self,
        household_id: Uuid,
        today: NaiveDate,
    ) -> Result<ExpirationReport, CoreError> {
        let _guard = self.locks.acquire(household_id).await;

        let items = self.stock_repository.list_by_household(household_id).await?;

        let mut removed = Vec::new();
        let mut alerts = Vec::new();

        for item in items {
            let Some(expiration_date) = item.expiration_date else {
                continue;
            };

            match expiration_status(Some(expiration_date), today) {
                Some(ExpirationStatus::Expired) => {
                    self.stock_repository.delete(item.id, household_id).await?;
                    removed.push(item);
                }
                Some(status @ (ExpirationStatus::Imminent | ExpirationStatus::Soon)) => {
                    alerts.push(ExpirationAlert {
                        stock_item_id: item.id,
                        name: item.name,
                        days_left: days_until(expiration_date, today),
                        status,
                    });
                }
                _ => {}
            }
        }

        if !removed.is_empty() {
            info!(removed = removed.len(), "Expired stock items removed");
        }

        Ok(ExpirationReport { removed, alerts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::mock_service;
    use crate::domain::stock::ports::MockStockRepository;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn item(household_id: Uuid, name: &str, expiration_date: Option<NaiveDate>) -> StockItem {
        StockItem::new(StockItemConfig {
            household_id,
            name: name.to_string(),
            quantity: 1.0,
            unit: "kg".to_string(),
            expiration_date,
        })
    }

    #[test]
    fn stock_validation() {
        assert!(ensure_valid_stock(Some("riz"), Some(0.0), Some("kg")).is_ok());
        assert!(ensure_valid_stock(Some(""), None, Some("kg")).is_err());
        assert!(ensure_valid_stock(Some("riz"), None, Some(" ")).is_err());
        assert!(ensure_valid_stock(Some("riz"), Some(-2.0), Some("kg")).is_err());
    }

    #[tokio::test]
    async fn expiration_sweep_removes_expired_and_reports_alerts() {
        let household_id = Uuid::new_v4();
        let today = date("2025-03-10");

        let expired = item(household_id, "lait", Some(date("2025-03-09")));
        let imminent = item(household_id, "yaourt", Some(date("2025-03-12")));
        let soon = item(household_id, "fromage", Some(date("2025-03-15")));
        let fresh = item(household_id, "riz", Some(date("2025-06-01")));
        let undated = item(household_id, "sel", None);

        let expired_id = expired.id;
        let listed = vec![
            expired.clone(),
            imminent.clone(),
            soon.clone(),
            fresh,
            undated,
        ];

        let mut stock = MockStockRepository::new();
        stock
            .expect_list_by_household()
            .returning(move |_| {
                let listed = listed.clone();
                Box::pin(async move { Ok(listed) })
            });
        stock
            .expect_delete()
            .withf(move |id, hh| *id == expired_id && *hh == household_id)
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let service = mock_service().with_stock(stock).build();

        let report = service
            .check_expirations(household_id, today)
            .await
            .unwrap();

        assert_eq!(report.removed, vec![expired]);
        assert_eq!(report.alerts.len(), 2);
        assert_eq!(report.alerts[0].stock_item_id, imminent.id);
        assert_eq!(report.alerts[0].status, ExpirationStatus::Imminent);
        assert_eq!(report.alerts[0].days_left, 2);
        assert_eq!(report.alerts[1].stock_item_id, soon.id);
        assert_eq!(report.alerts[1].status, ExpirationStatus::Soon);
    }

    #[tokio::test]
    async fn created_item_without_quantity_starts_empty() {
        let mut stock = MockStockRepository::new();
        stock
            .expect_create()
            .returning(|item| Box::pin(async move { Ok(item) }));

        let service = mock_service().with_stock(stock).build();

        let created = service
            .create_stock_item(
                Uuid::new_v4(),
                CreateStockItemInput {
                    name: "farine".to_string(),
                    quantity: None,
                    unit: "kg".to_string(),
                    expiration_date: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(created.quantity, 0.0);
        assert_eq!(created.version, 0);
    }
}
