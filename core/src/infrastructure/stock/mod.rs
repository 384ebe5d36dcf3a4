pub mod mappers;
pub mod repositories;

pub use repositories::stock_repository::PostgresStockRepository;
