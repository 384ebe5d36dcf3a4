use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    family::ports::FamilyMemberRepository,
    health::ports::HealthCheckRepository,
    household::ports::HouseholdRepository,
    planning::ports::{MealPlanRepository, ReconciliationRepository},
    proposition::{
        entities::{Proposition, PropositionItem, PropositionMessage, PropositionStatus},
        ports::{PropositionRepository, PropositionService},
    },
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
    stock::ports::StockRepository,
};

const DEFAULT_CLIENT_NAME: &str = "Client";

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> Service<HH, FM, RC, ST, SL, MP, RR, PR, HC>
where
    PR: PropositionRepository,
{
    async fn proposition(&self, proposition_id: Uuid) -> Result<Proposition, CoreError> {
        self.proposition_repository
            .get(proposition_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    /// Persists a status change that was already checked against the loaded row.
    async fn store_transition(
        &self,
        proposition: Proposition,
        from: PropositionStatus,
    ) -> Result<Proposition, CoreError> {
        if !self
            .proposition_repository
            .transition(proposition.clone(), from)
            .await?
        {
            return Err(CoreError::Invalid(format!(
                "proposition is no longer '{from}'"
            )));
        }

        Ok(proposition)
    }
}

impl<HH, FM, RC, ST, SL, MP, RR, PR, HC> PropositionService
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
    #[instrument(skip(self, client_name), fields(household_id = %household_id))]
    async fn send_shopping_list(
        &self,
        household_id: Uuid,
        client_name: Option<String>,
    ) -> Result<Proposition, CoreError> {
        let client_name = client_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_CLIENT_NAME.to_string());

        let _guard = self.locks.acquire(household_id).await;

        let items = self
            .shopping_list_repository
            .list_by_household(household_id)
            .await?;
        if items.is_empty() {
            return Err(CoreError::Invalid("shopping list is empty".to_string()));
        }

        let proposition = Proposition::new(
            household_id,
            client_name,
            items.iter().map(PropositionItem::from).collect(),
        );
        let created = self
            .proposition_repository
            .create_from_shopping_list(proposition, items.iter().map(|item| item.id).collect())
            .await?;

        info!(
            proposition_id = %created.id,
            items = created.items.len(),
            "Shopping list sent to vendors"
        );

        Ok(created)
    }

    async fn get_client_propositions(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<Proposition>, CoreError> {
        self.proposition_repository
            .list_by_client(household_id)
            .await
    }

    async fn get_pending_propositions(
        &self,
        vendor_id: Uuid,
    ) -> Result<Vec<Proposition>, CoreError> {
        let mut pending = self
            .proposition_repository
            .list_by_status(PropositionStatus::Pending)
            .await?;
        pending.retain(|proposition| proposition.household_id != vendor_id);

        Ok(pending)
    }

    async fn get_vendor_orders(&self, vendor_id: Uuid) -> Result<Vec<Proposition>, CoreError> {
        self.proposition_repository
            .list_by_vendor(vendor_id, PropositionStatus::InDelivery)
            .await
    }

    #[instrument(skip(self), fields(vendor_id = %vendor_id))]
    async fn accept_proposition(
        &self,
        vendor_id: Uuid,
        proposition_id: Uuid,
    ) -> Result<Proposition, CoreError> {
        let mut proposition = self.proposition(proposition_id).await?;
        proposition.accept(vendor_id)?;

        let accepted = self
            .store_transition(proposition, PropositionStatus::Pending)
            .await?;
        info!(proposition_id = %accepted.id, "Proposition accepted");

        Ok(accepted)
    }

    #[instrument(skip(self), fields(vendor_id = %vendor_id))]
    async fn deliver_proposition(
        &self,
        vendor_id: Uuid,
        proposition_id: Uuid,
    ) -> Result<Proposition, CoreError> {
        let mut proposition = self.proposition(proposition_id).await?;
        proposition.deliver(vendor_id)?;

        let delivered = self
            .store_transition(proposition, PropositionStatus::InDelivery)
            .await?;
        info!(proposition_id = %delivered.id, "Proposition delivered");

        Ok(delivered)
    }

    async fn post_proposition_message(
        &self,
        sender_id: Uuid,
        proposition_id: Uuid,
        text: String,
    ) -> Result<PropositionMessage, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Invalid("message is empty".to_string()));
        }

        let proposition = self.proposition(proposition_id).await?;
        if !proposition.accepts_messages_from(sender_id) {
            return Err(CoreError::Forbidden);
        }

        self.proposition_repository
            .add_message(PropositionMessage::new(
                proposition.id,
                sender_id,
                text.to_string(),
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        common::services::test_support::mock_service,
        proposition::ports::MockPropositionRepository,
        shopping_list::{
            entities::{ShoppingListItem, ShoppingListItemConfig},
            ports::MockShoppingListRepository,
        },
    };

    fn pending(client: Uuid) -> Proposition {
        Proposition::new(
            client,
            "Awa".to_string(),
            vec![PropositionItem {
                name: "oignon".to_string(),
                quantity: 1.5,
                unit: "kg".to_string(),
            }],
        )
    }

    fn in_delivery(client: Uuid, vendor: Uuid) -> Proposition {
        let mut proposition = pending(client);
        proposition.accept(vendor).unwrap();
        proposition
    }

    fn delivered(client: Uuid, vendor: Uuid) -> Proposition {
        let mut proposition = in_delivery(client, vendor);
        proposition.deliver(vendor).unwrap();
        proposition
    }

    fn serving(proposition: Proposition) -> MockPropositionRepository {
        let mut repository = MockPropositionRepository::new();
        repository
            .expect_get()
            .with(eq(proposition.id))
            .returning(move |_| {
                let proposition = proposition.clone();
                Box::pin(async move { Ok(Some(proposition)) })
            });
        repository
    }

    fn list_item(household_id: Uuid, name: &str) -> ShoppingListItem {
        ShoppingListItem::new(ShoppingListItemConfig {
            household_id,
            name: name.to_string(),
            quantity: 2.0,
            unit: "kg".to_string(),
            price: 500.0,
        })
    }

    #[tokio::test]
    async fn sending_the_list_creates_a_pending_proposition() {
        let household_id = Uuid::new_v4();
        let rows = vec![list_item(household_id, "riz"), list_item(household_id, "huile")];
        let row_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();

        let mut shopping_list = MockShoppingListRepository::new();
        shopping_list
            .expect_list_by_household()
            .with(eq(household_id))
            .returning(move |_| {
                let rows = rows.clone();
                Box::pin(async move { Ok(rows) })
            });

        let mut propositions = MockPropositionRepository::new();
        propositions
            .expect_create_from_shopping_list()
            .withf(move |_, item_ids| *item_ids == row_ids)
            .times(1)
            .returning(|proposition, _| Box::pin(async move { Ok(proposition) }));

        let service = mock_service()
            .with_shopping_list(shopping_list)
            .with_proposition(propositions)
            .build();
        let proposition = service
            .send_shopping_list(household_id, Some("  ".to_string()))
            .await
            .unwrap();

        assert_eq!(proposition.status, PropositionStatus::Pending);
        assert_eq!(proposition.household_id, household_id);
        assert_eq!(proposition.client_name, "Client");
        assert_eq!(proposition.items.len(), 2);
        assert_eq!(proposition.items[0].name, "riz");
        assert!(proposition.vendor_id.is_none());
        assert!(proposition.messages.is_empty());
    }

    #[tokio::test]
    async fn empty_list_is_not_sent() {
        let mut shopping_list = MockShoppingListRepository::new();
        shopping_list
            .expect_list_by_household()
            .returning(|_| Box::pin(async { Ok(vec![]) }));

        let service = mock_service().with_shopping_list(shopping_list).build();
        let result = service.send_shopping_list(Uuid::new_v4(), None).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn accepting_moves_pending_to_in_delivery() {
        let vendor = Uuid::new_v4();
        let proposition = pending(Uuid::new_v4());
        let proposition_id = proposition.id;

        let mut repository = serving(proposition);
        repository
            .expect_transition()
            .withf(move |proposition, from| {
                *from == PropositionStatus::Pending
                    && proposition.status == PropositionStatus::InDelivery
                    && proposition.vendor_id == Some(vendor)
                    && proposition.accepted_at.is_some()
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(true) }));

        let service = mock_service().with_proposition(repository).build();
        let accepted = service
            .accept_proposition(vendor, proposition_id)
            .await
            .unwrap();

        assert_eq!(accepted.status, PropositionStatus::InDelivery);
        assert_eq!(accepted.vendor_id, Some(vendor));
    }

    #[tokio::test]
    async fn delivering_moves_in_delivery_to_delivered() {
        let vendor = Uuid::new_v4();
        let proposition = in_delivery(Uuid::new_v4(), vendor);
        let proposition_id = proposition.id;

        let mut repository = serving(proposition);
        repository
            .expect_transition()
            .withf(|proposition, from| {
                *from == PropositionStatus::InDelivery
                    && proposition.status == PropositionStatus::Delivered
                    && proposition.delivered_at.is_some()
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(true) }));

        let service = mock_service().with_proposition(repository).build();
        let delivered = service
            .deliver_proposition(vendor, proposition_id)
            .await
            .unwrap();

        assert_eq!(delivered.status, PropositionStatus::Delivered);
    }

    #[tokio::test]
    async fn accepting_an_accepted_proposition_is_rejected() {
        let proposition = in_delivery(Uuid::new_v4(), Uuid::new_v4());
        let proposition_id = proposition.id;

        let service = mock_service().with_proposition(serving(proposition)).build();
        let result = service
            .accept_proposition(Uuid::new_v4(), proposition_id)
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn accepting_a_delivered_proposition_is_rejected() {
        let proposition = delivered(Uuid::new_v4(), Uuid::new_v4());
        let proposition_id = proposition.id;

        let service = mock_service().with_proposition(serving(proposition)).build();
        let result = service
            .accept_proposition(Uuid::new_v4(), proposition_id)
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn losing_the_accept_race_is_rejected() {
        let proposition = pending(Uuid::new_v4());
        let proposition_id = proposition.id;

        let mut repository = serving(proposition);
        repository
            .expect_transition()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let service = mock_service().with_proposition(repository).build();
        let result = service
            .accept_proposition(Uuid::new_v4(), proposition_id)
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn clients_cannot_accept_their_own_proposition() {
        let client = Uuid::new_v4();
        let proposition = pending(client);
        let proposition_id = proposition.id;

        let service = mock_service().with_proposition(serving(proposition)).build();
        let result = service.accept_proposition(client, proposition_id).await;

        assert_eq!(result, Err(CoreError::Forbidden));
    }

    #[tokio::test]
    async fn delivering_a_pending_proposition_is_rejected() {
        let proposition = pending(Uuid::new_v4());
        let proposition_id = proposition.id;

        let service = mock_service().with_proposition(serving(proposition)).build();
        let result = service
            .deliver_proposition(Uuid::new_v4(), proposition_id)
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn delivering_twice_is_rejected() {
        let vendor = Uuid::new_v4();
        let proposition = delivered(Uuid::new_v4(), vendor);
        let proposition_id = proposition.id;

        let service = mock_service().with_proposition(serving(proposition)).build();
        let result = service.deliver_proposition(vendor, proposition_id).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn only_the_accepting_vendor_delivers() {
        let proposition = in_delivery(Uuid::new_v4(), Uuid::new_v4());
        let proposition_id = proposition.id;

        let service = mock_service().with_proposition(serving(proposition)).build();
        let result = service
            .deliver_proposition(Uuid::new_v4(), proposition_id)
            .await;

        assert_eq!(result, Err(CoreError::Forbidden));
    }

    #[tokio::test]
    async fn unknown_propositions_are_not_found() {
        let mut repository = MockPropositionRepository::new();
        repository
            .expect_get()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = mock_service().with_proposition(repository).build();

        assert_eq!(
            service
                .accept_proposition(Uuid::new_v4(), Uuid::new_v4())
                .await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn pending_list_hides_the_vendor_own_lists() {
        let vendor = Uuid::new_v4();
        let own = pending(vendor);
        let other = pending(Uuid::new_v4());
        let other_id = other.id;

        let mut repository = MockPropositionRepository::new();
        repository
            .expect_list_by_status()
            .with(eq(PropositionStatus::Pending))
            .returning(move |_| {
                let rows = vec![own.clone(), other.clone()];
                Box::pin(async move { Ok(rows) })
            });

        let service = mock_service().with_proposition(repository).build();
        let pending = service.get_pending_propositions(vendor).await.unwrap();

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, other_id);
    }

    #[tokio::test]
    async fn vendor_orders_are_the_ones_in_delivery() {
        let vendor = Uuid::new_v4();

        let mut repository = MockPropositionRepository::new();
        repository
            .expect_list_by_vendor()
            .with(eq(vendor), eq(PropositionStatus::InDelivery))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(vec![]) }));

        let service = mock_service().with_proposition(repository).build();

        assert!(service.get_vendor_orders(vendor).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn participants_post_messages() {
        let client = Uuid::new_v4();
        let vendor = Uuid::new_v4();
        let proposition = in_delivery(client, vendor);
        let proposition_id = proposition.id;

        let mut repository = serving(proposition);
        repository
            .expect_add_message()
            .times(2)
            .returning(|message| Box::pin(async move { Ok(message) }));

        let service = mock_service().with_proposition(repository).build();

        let from_vendor = service
            .post_proposition_message(vendor, proposition_id, " J'arrive à 18h ".to_string())
            .await
            .unwrap();
        assert_eq!(from_vendor.text, "J'arrive à 18h");
        assert_eq!(from_vendor.sender_id, vendor);

        let from_client = service
            .post_proposition_message(client, proposition_id, "Merci".to_string())
            .await
            .unwrap();
        assert_eq!(from_client.proposition_id, proposition_id);
    }

    #[tokio::test]
    async fn outsiders_cannot_join_an_accepted_thread() {
        let proposition = in_delivery(Uuid::new_v4(), Uuid::new_v4());
        let proposition_id = proposition.id;

        let service = mock_service().with_proposition(serving(proposition)).build();

        assert_eq!(
            service
                .post_proposition_message(Uuid::new_v4(), proposition_id, "Bonjour".to_string())
                .await,
            Err(CoreError::Forbidden)
        );
        assert!(matches!(
            service
                .post_proposition_message(Uuid::new_v4(), proposition_id, "  ".to_string())
                .await,
            Err(CoreError::Invalid(_))
        ));
    }
}
