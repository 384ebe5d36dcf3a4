pub mod entities;
pub mod ports;
pub mod services;

pub use entities::Household;
pub use ports::{HouseholdRepository, HouseholdService};
