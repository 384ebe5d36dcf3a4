use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, household::entities::Household};

#[cfg_attr(test, mockall::automock)]
pub trait HouseholdRepository: Send + Sync {
    fn get_by_owner(
        &self,
        owner_ref: &str,
    ) -> impl Future<Output = Result<Option<Household>, CoreError>> + Send;

    /// Inserts the household, or returns the existing row when another request won the race.
    fn create(
        &self,
        household: Household,
    ) -> impl Future<Output = Result<Household, CoreError>> + Send;
}

pub trait HouseholdService: Send + Sync {
    fn get_or_create_household(
        &self,
        owner_ref: &str,
    ) -> impl Future<Output = Result<Household, CoreError>> + Send;
}
