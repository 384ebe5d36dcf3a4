pub mod postgres;
pub mod transaction;
