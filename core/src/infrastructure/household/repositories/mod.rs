pub mod household_repository;
