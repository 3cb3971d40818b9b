//! In-memory collaborators for unit tests.

use crate::domain::{
    entities::Recipe,
    repositories::RecipeRepository,
    services::{Notifier, Severity},
};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn recipe(id: &str, category: &str) -> Recipe {
    Recipe::new(id, format!("Recipe {id}")).with_category(category)
}

/// Canned responses per first letter, with optional per-letter failures.
#[derive(Default)]
pub struct FakeRecipeRepository {
    by_letter: HashMap<char, Vec<Recipe>>,
    failing_letters: HashSet<char>,
    search_results: Vec<Recipe>,
    letter_calls: AtomicUsize,
    search_queries: Mutex<Vec<String>>,
}

impl FakeRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_letter(mut self, letter: char, recipes: Vec<Recipe>) -> Self {
        self.by_letter.insert(letter, recipes);
        self
    }

    pub fn failing_letter(mut self, letter: char) -> Self {
        self.failing_letters.insert(letter);
        self
    }

    pub fn with_search_results(mut self, recipes: Vec<Recipe>) -> Self {
        self.search_results = recipes;
        self
    }

    pub fn letter_calls(&self) -> usize {
        self.letter_calls.load(Ordering::SeqCst)
    }

    pub fn search_queries(&self) -> Vec<String> {
        self.search_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeRepository for FakeRecipeRepository {
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Recipe>> {
        self.letter_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_letters.contains(&letter) {
            return Err(anyhow!("letter {letter} unavailable"));
        }
        Ok(self.by_letter.get(&letter).cloned().unwrap_or_default())
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>> {
        self.search_queries.lock().unwrap().push(query.to_string());
        Ok(self.search_results.clone())
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>> {
        Ok(self
            .by_letter
            .values()
            .flatten()
            .chain(self.search_results.iter())
            .find(|recipe| recipe.id == id)
            .cloned())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.messages().into_iter().map(|(_, severity)| severity).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}
