use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    shopping_list::entities::ShoppingListItem,
};

/// Lifecycle of a shopping list sent to vendors. Statuses only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PropositionStatus {
    #[serde(rename = "EN ATTENTE")]
    Pending,
    #[serde(rename = "EN COURS DE LIVRAISON")]
    InDelivery,
    #[serde(rename = "LIVRÉ")]
    Delivered,
}

impl PropositionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropositionStatus::Pending => "EN ATTENTE",
            PropositionStatus::InDelivery => "EN COURS DE LIVRAISON",
            PropositionStatus::Delivered => "LIVRÉ",
        }
    }

    pub fn can_become(&self, next: PropositionStatus) -> bool {
        matches!(
            (self, next),
            (PropositionStatus::Pending, PropositionStatus::InDelivery)
                | (PropositionStatus::InDelivery, PropositionStatus::Delivered)
        )
    }
}

impl fmt::Display for PropositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropositionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EN ATTENTE" => Ok(PropositionStatus::Pending),
            "EN COURS DE LIVRAISON" => Ok(PropositionStatus::InDelivery),
            "LIVRÉ" => Ok(PropositionStatus::Delivered),
            other => Err(format!("unknown proposition status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropositionItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl From<&ShoppingListItem> for PropositionItem {
    fn from(item: &ShoppingListItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropositionMessage {
    pub id: Uuid,
    pub proposition_id: Uuid,
    /// Household that wrote the message, client or vendor.
    pub sender_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl PropositionMessage {
    pub fn new(proposition_id: Uuid, sender_id: Uuid, text: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            proposition_id,
            sender_id,
            text,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Proposition {
    pub id: Uuid,
    /// Household that sent its shopping list.
    pub household_id: Uuid,
    pub client_name: String,
    pub items: Vec<PropositionItem>,
    pub status: PropositionStatus,
    /// Household that accepted the order.
    pub vendor_id: Option<Uuid>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub messages: Vec<PropositionMessage>,
    pub created_at: DateTime<Utc>,
}

impl Proposition {
    pub fn new(household_id: Uuid, client_name: String, items: Vec<PropositionItem>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            household_id,
            client_name,
            items,
            status: PropositionStatus::Pending,
            vendor_id: None,
            accepted_at: None,
            delivered_at: None,
            messages: vec![],
            created_at: now,
        }
    }

    fn advance(&mut self, next: PropositionStatus) -> Result<(), CoreError> {
        if !self.status.can_become(next) {
            return Err(CoreError::Invalid(format!(
                "proposition is '{}' and cannot become '{}'",
                self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }

    /// A vendor takes a pending proposition. Clients cannot accept their own list.
    pub fn accept(&mut self, vendor_id: Uuid) -> Result<(), CoreError> {
        if vendor_id == self.household_id {
            return Err(CoreError::Forbidden);
        }
        self.advance(PropositionStatus::InDelivery)?;
        self.vendor_id = Some(vendor_id);
        self.accepted_at = Some(Utc::now());
        Ok(())
    }

    /// Only the vendor that accepted the proposition may deliver it.
    pub fn deliver(&mut self, vendor_id: Uuid) -> Result<(), CoreError> {
        if self.status == PropositionStatus::InDelivery && self.vendor_id != Some(vendor_id) {
            return Err(CoreError::Forbidden);
        }
        self.advance(PropositionStatus::Delivered)?;
        self.delivered_at = Some(Utc::now());
        Ok(())
    }

    /// The client always, the accepting vendor once accepted, any vendor while pending.
    pub fn accepts_messages_from(&self, sender_id: Uuid) -> bool {
        sender_id == self.household_id
            || match self.status {
                PropositionStatus::Pending => true,
                _ => self.vendor_id == Some(sender_id),
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposition() -> Proposition {
        Proposition::new(
            Uuid::new_v4(),
            "Awa".to_string(),
            vec![PropositionItem {
                name: "riz".to_string(),
                quantity: 2.0,
                unit: "kg".to_string(),
            }],
        )
    }

    #[test]
    fn statuses_keep_their_french_labels() {
        assert_eq!(
            serde_json::to_string(&PropositionStatus::InDelivery).unwrap(),
            r#""EN COURS DE LIVRAISON""#
        );
        assert_eq!(
            "LIVRÉ".parse::<PropositionStatus>(),
            Ok(PropositionStatus::Delivered)
        );
        assert!("LIVRE".parse::<PropositionStatus>().is_err());
    }

    #[test]
    fn statuses_only_move_forward() {
        use PropositionStatus::*;

        assert!(Pending.can_become(InDelivery));
        assert!(InDelivery.can_become(Delivered));
        assert!(!Pending.can_become(Delivered));
        assert!(!InDelivery.can_become(Pending));
        assert!(!Delivered.can_become(InDelivery));
        assert!(!Delivered.can_become(Pending));
        assert!(!Pending.can_become(Pending));
    }

    #[test]
    fn accepting_records_the_vendor() {
        let mut proposition = proposition();
        let vendor_id = Uuid::new_v4();

        proposition.accept(vendor_id).unwrap();

        assert_eq!(proposition.status, PropositionStatus::InDelivery);
        assert_eq!(proposition.vendor_id, Some(vendor_id));
        assert!(proposition.accepted_at.is_some());
        assert!(proposition.delivered_at.is_none());
    }

    #[test]
    fn clients_cannot_accept_their_own_list() {
        let mut proposition = proposition();
        let client = proposition.household_id;

        assert_eq!(proposition.accept(client), Err(CoreError::Forbidden));
        assert_eq!(proposition.status, PropositionStatus::Pending);
    }

    #[test]
    fn pending_propositions_cannot_be_delivered() {
        let mut proposition = proposition();

        assert!(matches!(
            proposition.deliver(Uuid::new_v4()),
            Err(CoreError::Invalid(_))
        ));
        assert!(proposition.delivered_at.is_none());
    }

    #[test]
    fn only_the_accepting_vendor_delivers() {
        let mut proposition = proposition();
        let vendor_id = Uuid::new_v4();
        proposition.accept(vendor_id).unwrap();

        assert_eq!(
            proposition.deliver(Uuid::new_v4()),
            Err(CoreError::Forbidden)
        );

        proposition.deliver(vendor_id).unwrap();
        assert_eq!(proposition.status, PropositionStatus::Delivered);
        assert!(proposition.delivered_at.is_some());

        assert!(matches!(
            proposition.deliver(vendor_id),
            Err(CoreError::Invalid(_))
        ));
        assert!(matches!(
            proposition.accept(Uuid::new_v4()),
            Err(CoreError::Invalid(_))
        ));
    }

    #[test]
    fn message_thread_narrows_once_accepted() {
        let mut proposition = proposition();
        let vendor_id = Uuid::new_v4();
        let other_vendor = Uuid::new_v4();

        assert!(proposition.accepts_messages_from(other_vendor));

        proposition.accept(vendor_id).unwrap();

        assert!(proposition.accepts_messages_from(proposition.household_id));
        assert!(proposition.accepts_messages_from(vendor_id));
        assert!(!proposition.accepts_messages_from(other_vendor));
    }
}
