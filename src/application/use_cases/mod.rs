pub mod recipe_operations;

pub use recipe_operations::*;
