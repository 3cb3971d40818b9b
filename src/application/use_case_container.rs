use crate::application::use_cases::*;
use crate::domain::repositories::RecipeRepository;
use std::sync::Arc;

pub struct UseCaseContainer {
    pub warm_up: Arc<WarmUpRecipes>,
    pub search: Arc<SearchRecipes>,
    pub lookup: Arc<LookupRecipe>,
}

impl UseCaseContainer {
    pub fn new(recipe_repository: Arc<dyn RecipeRepository>) -> Self {
        Self {
            warm_up: Arc::new(WarmUpRecipes::new(Arc::clone(&recipe_repository))),
            search: Arc::new(SearchRecipes::new(Arc::clone(&recipe_repository))),
            lookup: Arc::new(LookupRecipe::new(Arc::clone(&recipe_repository))),
        }
    }
}
