pub mod family_member_repository;
