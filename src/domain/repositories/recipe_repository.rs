use crate::domain::entities::Recipe;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Recipe>>;
    async fn search(&self, query: &str) -> Result<Vec<Recipe>>;
    async fn lookup(&self, id: &str) -> Result<Option<Recipe>>;
}
