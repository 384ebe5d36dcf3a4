use std::collections::HashMap;

use sea_orm::ActiveValue::Set;
use tracing::warn;
use uuid::Uuid;

use crate::{
    domain::proposition::entities::{Proposition, PropositionMessage, PropositionStatus},
    entity::{proposition_messages, propositions},
};

impl From<proposition_messages::Model> for PropositionMessage {
    fn from(model: proposition_messages::Model) -> Self {
        Self {
            id: model.id,
            proposition_id: model.proposition_id,
            sender_id: model.sender_id,
            text: model.text,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<&PropositionMessage> for proposition_messages::ActiveModel {
    fn from(message: &PropositionMessage) -> Self {
        Self {
            id: Set(message.id),
            proposition_id: Set(message.proposition_id),
            sender_id: Set(message.sender_id),
            text: Set(message.text.clone()),
            created_at: Set(message.created_at.fixed_offset()),
        }
    }
}

impl From<&Proposition> for propositions::ActiveModel {
    fn from(proposition: &Proposition) -> Self {
        Self {
            id: Set(proposition.id),
            household_id: Set(proposition.household_id),
            client_name: Set(proposition.client_name.clone()),
            items: Set(serde_json::json!(proposition.items)),
            status: Set(proposition.status.as_str().to_string()),
            vendor_id: Set(proposition.vendor_id),
            accepted_at: Set(proposition.accepted_at.map(|at| at.fixed_offset())),
            delivered_at: Set(proposition.delivered_at.map(|at| at.fixed_offset())),
            created_at: Set(proposition.created_at.fixed_offset()),
        }
    }
}

fn to_proposition(
    model: propositions::Model,
    messages: Vec<PropositionMessage>,
) -> Result<Proposition, String> {
    Ok(Proposition {
        id: model.id,
        household_id: model.household_id,
        client_name: model.client_name,
        items: serde_json::from_value(model.items).map_err(|e| e.to_string())?,
        status: model.status.parse::<PropositionStatus>()?,
        vendor_id: model.vendor_id,
        accepted_at: model.accepted_at.map(|at| at.to_utc()),
        delivered_at: model.delivered_at.map(|at| at.to_utc()),
        messages,
        created_at: model.created_at.to_utc(),
    })
}

/// Joins propositions with their messages, oldest message first. Unreadable rows are dropped.
pub fn to_propositions(
    models: Vec<propositions::Model>,
    messages: Vec<proposition_messages::Model>,
) -> Vec<Proposition> {
    let mut threads: HashMap<Uuid, Vec<PropositionMessage>> = HashMap::new();
    for message in messages {
        threads
            .entry(message.proposition_id)
            .or_default()
            .push(PropositionMessage::from(message));
    }
    for thread in threads.values_mut() {
        thread.sort_by_key(|message| message.created_at);
    }

    models
        .into_iter()
        .filter_map(|model| {
            let id = model.id;
            let thread = threads.remove(&id).unwrap_or_default();
            to_proposition(model, thread)
                .map_err(|e| warn!(proposition_id = %id, "Skipping proposition: {}", e))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn model(status: &str) -> propositions::Model {
        propositions::Model {
            id: Uuid::new_v4(),
            household_id: Uuid::new_v4(),
            client_name: "Awa".to_string(),
            items: serde_json::json!([{"name": "riz", "quantity": 2.0, "unit": "kg"}]),
            status: status.to_string(),
            vendor_id: None,
            accepted_at: None,
            delivered_at: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn message(proposition_id: Uuid, text: &str, minutes: i64) -> proposition_messages::Model {
        proposition_messages::Model {
            id: Uuid::new_v4(),
            proposition_id,
            sender_id: Uuid::new_v4(),
            text: text.to_string(),
            created_at: (Utc::now() + Duration::minutes(minutes)).fixed_offset(),
        }
    }

    #[test]
    fn threads_follow_their_proposition_in_order() {
        let first = model("EN ATTENTE");
        let second = model("EN COURS DE LIVRAISON");
        let messages = vec![
            message(second.id, "plus tard", 5),
            message(first.id, "bonjour", 0),
            message(second.id, "avant", 1),
        ];
        let second_id = second.id;

        let propositions = to_propositions(vec![first, second], messages);

        assert_eq!(propositions.len(), 2);
        assert_eq!(propositions[0].messages.len(), 1);
        assert_eq!(propositions[0].items[0].unit, "kg");
        assert_eq!(propositions[1].id, second_id);
        assert_eq!(propositions[1].status, PropositionStatus::InDelivery);
        assert_eq!(propositions[1].messages[0].text, "avant");
        assert_eq!(propositions[1].messages[1].text, "plus tard");
    }

    #[test]
    fn unknown_statuses_are_skipped() {
        let propositions = to_propositions(vec![model("LIVRÉ"), model("ANNULÉ")], vec![]);

        assert_eq!(propositions.len(), 1);
        assert_eq!(propositions[0].status, PropositionStatus::Delivered);
    }
}
