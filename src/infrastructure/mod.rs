pub mod config_repository;
pub mod mealdb;
pub mod storage;

pub use config_repository::ConfigRepository;
