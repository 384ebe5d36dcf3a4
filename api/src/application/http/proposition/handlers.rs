pub mod accept_proposition;
pub mod deliver_proposition;
pub mod get_client_propositions;
pub mod get_pending_propositions;
pub mod get_vendor_orders;
pub mod post_proposition_message;
