use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    proposition::entities::{Proposition, PropositionMessage, PropositionStatus},
};

#[cfg_attr(test, mockall::automock)]
pub trait PropositionRepository: Send + Sync {
    /// Stores the proposition and removes the listed shopping list rows in one transaction.
    fn create_from_shopping_list(
        &self,
        proposition: Proposition,
        item_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Proposition, CoreError>> + Send;

    fn get(
        &self,
        proposition_id: Uuid,
    ) -> impl Future<Output = Result<Option<Proposition>, CoreError>> + Send;

    /// Newest first.
    fn list_by_client(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Proposition>, CoreError>> + Send;

    /// Oldest first.
    fn list_by_status(
        &self,
        status: PropositionStatus,
    ) -> impl Future<Output = Result<Vec<Proposition>, CoreError>> + Send;

    fn list_by_vendor(
        &self,
        vendor_id: Uuid,
        status: PropositionStatus,
    ) -> impl Future<Output = Result<Vec<Proposition>, CoreError>> + Send;

    /// Writes the new status and its bookkeeping only if the stored status is still `from`.
    /// Returns whether the row changed.
    fn transition(
        &self,
        proposition: Proposition,
        from: PropositionStatus,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn add_message(
        &self,
        message: PropositionMessage,
    ) -> impl Future<Output = Result<PropositionMessage, CoreError>> + Send;
}

pub trait PropositionService: Send + Sync {
    /// Sends the whole shopping list to vendors and empties it.
    fn send_shopping_list(
        &self,
        household_id: Uuid,
        client_name: Option<String>,
    ) -> impl Future<Output = Result<Proposition, CoreError>> + Send;

    fn get_client_propositions(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Proposition>, CoreError>> + Send;

    /// Pending propositions from other households.
    fn get_pending_propositions(
        &self,
        vendor_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Proposition>, CoreError>> + Send;

    /// Orders the vendor accepted and still has to deliver.
    fn get_vendor_orders(
        &self,
        vendor_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Proposition>, CoreError>> + Send;

    fn accept_proposition(
        &self,
        vendor_id: Uuid,
        proposition_id: Uuid,
    ) -> impl Future<Output = Result<Proposition, CoreError>> + Send;

    fn deliver_proposition(
        &self,
        vendor_id: Uuid,
        proposition_id: Uuid,
    ) -> impl Future<Output = Result<Proposition, CoreError>> + Send;

    fn post_proposition_message(
        &self,
        sender_id: Uuid,
        proposition_id: Uuid,
        text: String,
    ) -> impl Future<Output = Result<PropositionMessage, CoreError>> + Send;
}
