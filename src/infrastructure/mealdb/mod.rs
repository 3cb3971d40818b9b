pub mod client;
pub mod models;
pub mod repository;

pub use client::MealDbClient;
pub use repository::MealDbRecipeRepository;
