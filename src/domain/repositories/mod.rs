pub mod key_value_store;
pub mod recipe_repository;

pub use key_value_store::KeyValueStore;
pub use recipe_repository::RecipeRepository;
