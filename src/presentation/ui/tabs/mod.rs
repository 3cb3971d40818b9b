pub mod favorites;
pub mod log;
pub mod recipes;

pub use favorites::FavoritesTab;
pub use log::{LogAction, LogTab};
pub use recipes::{RecipesAction, RecipesTab};
