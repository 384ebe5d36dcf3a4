pub mod create_family_member;
pub mod delete_family_member;
pub mod get_family_coefficient;
pub mod get_family_member;
pub mod get_family_members;
pub mod update_family_member;
