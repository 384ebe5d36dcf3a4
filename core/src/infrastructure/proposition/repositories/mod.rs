pub mod proposition_repository;
