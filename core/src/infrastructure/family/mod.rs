pub mod mappers;
pub mod repositories;

pub use repositories::family_member_repository::PostgresFamilyMemberRepository;
