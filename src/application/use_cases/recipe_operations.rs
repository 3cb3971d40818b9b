use crate::domain::{
    entities::Recipe,
    repositories::RecipeRepository,
    services::SearchQueryValidator,
};
use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinSet;

pub const WARM_UP_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Bulk load: one first-letter query per letter, results concatenated in
/// alphabetical order. A failing letter contributes nothing.
pub struct WarmUpRecipes {
    repository: Arc<dyn RecipeRepository>,
}

impl WarmUpRecipes {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Recipe>> {
        let mut tasks = JoinSet::new();

        for (index, letter) in WARM_UP_LETTERS.chars().enumerate() {
            let repository = Arc::clone(&self.repository);
            tasks.spawn(async move {
                let result = repository.search_by_first_letter(letter).await;
                (index, letter, result)
            });
        }

        let mut batches = Vec::with_capacity(WARM_UP_LETTERS.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, _, Ok(recipes))) => batches.push((index, recipes)),
                Ok((_, letter, Err(e))) => {
                    tracing::warn!("Skipping letter '{}': {:#}", letter, e);
                }
                Err(e) => {
                    tracing::warn!("Warm-up task did not complete: {}", e);
                }
            }
        }

        batches.sort_by_key(|(index, _)| *index);
        let recipes: Vec<Recipe> = batches.into_iter().flat_map(|(_, batch)| batch).collect();

        tracing::info!("Warm-up loaded {} recipes", recipes.len());
        Ok(recipes)
    }
}

pub struct SearchRecipes {
    repository: Arc<dyn RecipeRepository>,
}

impl SearchRecipes {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, query: &str) -> Result<Vec<Recipe>> {
        let query = SearchQueryValidator::validate(query)?;
        self.repository.search(query).await
    }
}

pub struct LookupRecipe {
    repository: Arc<dyn RecipeRepository>,
}

impl LookupRecipe {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<Option<Recipe>> {
        self.repository.lookup(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::testing::{FakeRecipeRepository, recipe};

    #[tokio::test]
    async fn warm_up_keeps_letter_order_and_skips_failures() {
        let repository = FakeRecipeRepository::new()
            .with_letter('c', vec![recipe("3", "Side")])
            .with_letter('a', vec![recipe("1", "Beef"), recipe("2", "Beef")])
            .with_letter('z', vec![recipe("26", "Dessert")])
            .failing_letter('b');
        let repository = Arc::new(repository);

        let recipes = WarmUpRecipes::new(repository.clone()).execute().await.unwrap();

        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "26"]);
        assert_eq!(repository.letter_calls(), 26);
    }

    #[tokio::test]
    async fn warm_up_with_every_letter_failing_is_empty() {
        let mut repository = FakeRecipeRepository::new();
        for letter in WARM_UP_LETTERS.chars() {
            repository = repository.failing_letter(letter);
        }

        let recipes = WarmUpRecipes::new(Arc::new(repository)).execute().await.unwrap();
        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn blank_search_never_reaches_repository() {
        let repository = Arc::new(FakeRecipeRepository::new());
        let search = SearchRecipes::new(repository.clone());

        let err = search.execute("   ").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::EmptyQuery)
        ));
        assert!(repository.search_queries().is_empty());
    }

    #[tokio::test]
    async fn search_passes_trimmed_query() {
        let repository = Arc::new(
            FakeRecipeRepository::new().with_search_results(vec![recipe("52771", "Vegetarian")]),
        );

        let recipes = SearchRecipes::new(repository.clone())
            .execute("  arrabiata ")
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(repository.search_queries(), vec!["arrabiata".to_string()]);
    }

    #[tokio::test]
    async fn lookup_reports_missing_recipe() {
        let repository = Arc::new(
            FakeRecipeRepository::new().with_letter('a', vec![recipe("52977", "Side")]),
        );
        let lookup = LookupRecipe::new(repository);

        assert_eq!(lookup.execute("52977").await.unwrap().unwrap().id, "52977");
        assert!(lookup.execute("0").await.unwrap().is_none());
    }
}
