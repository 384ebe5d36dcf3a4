pub mod mappers;
pub mod repositories;

pub use repositories::proposition_repository::PostgresPropositionRepository;
