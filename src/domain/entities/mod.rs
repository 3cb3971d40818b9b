pub mod config;
pub mod favorites;
pub mod recipe;

pub use config::AppConfig;
pub use favorites::FavoriteSet;
pub use recipe::Recipe;
