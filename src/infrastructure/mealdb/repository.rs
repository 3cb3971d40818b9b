use crate::domain::{entities::Recipe, repositories::RecipeRepository};
use crate::infrastructure::mealdb::client::MealDbClient;
use anyhow::Result;
use async_trait::async_trait;

pub struct MealDbRecipeRepository {
    client: MealDbClient,
}

impl MealDbRecipeRepository {
    pub fn new(client: MealDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecipeRepository for MealDbRecipeRepository {
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Recipe>> {
        let recipes = self.client.search_by_first_letter(letter).await?.into_recipes();
        tracing::debug!("Letter '{}' returned {} recipes", letter, recipes.len());
        Ok(recipes)
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>> {
        let recipes = self.client.search_by_name(query).await?.into_recipes();
        tracing::info!("Search '{}' returned {} recipes", query, recipes.len());
        Ok(recipes)
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>> {
        let recipe = self
            .client
            .lookup_by_id(id)
            .await?
            .into_recipes()
            .into_iter()
            .next();

        if recipe.is_none() {
            tracing::info!("Recipe {} not found", id);
        }

        Ok(recipe)
    }
}
