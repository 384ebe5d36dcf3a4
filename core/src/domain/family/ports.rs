use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    family::{
        entities::FamilyMember,
        value_objects::{CreateFamilyMemberInput, UpdateFamilyMemberInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait FamilyMemberRepository: Send + Sync {
    fn list_by_household(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FamilyMember>, CoreError>> + Send;

    fn get_by_id(
        &self,
        member_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Option<FamilyMember>, CoreError>> + Send;

    fn create(
        &self,
        member: FamilyMember,
    ) -> impl Future<Output = Result<FamilyMember, CoreError>> + Send;

    fn update(
        &self,
        member: FamilyMember,
    ) -> impl Future<Output = Result<FamilyMember, CoreError>> + Send;

    fn delete(
        &self,
        member_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait FamilyService: Send + Sync {
    fn get_family_members(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FamilyMember>, CoreError>> + Send;

    fn get_family_member(
        &self,
        household_id: Uuid,
        member_id: Uuid,
    ) -> impl Future<Output = Result<FamilyMember, CoreError>> + Send;

    fn create_family_member(
        &self,
        household_id: Uuid,
        input: CreateFamilyMemberInput,
    ) -> impl Future<Output = Result<FamilyMember, CoreError>> + Send;

    fn update_family_member(
        &self,
        household_id: Uuid,
        member_id: Uuid,
        input: UpdateFamilyMemberInput,
    ) -> impl Future<Output = Result<FamilyMember, CoreError>> + Send;

    fn delete_family_member(
        &self,
        household_id: Uuid,
        member_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Consumption coefficient of the household's current members.
    fn get_family_coefficient(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<f64, CoreError>> + Send;
}
