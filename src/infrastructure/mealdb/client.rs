use crate::infrastructure::mealdb::models::MealsResponse;
use anyhow::{Context, Result};
use std::time::Duration;

const SEARCH_PATH: &str = "search.php";
const LOOKUP_PATH: &str = "lookup.php";

pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_meals(&self, path: &str, param: &str, value: &str) -> Result<MealsResponse> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}?{}={}", url, param, value);

        let response = self
            .http
            .get(&url)
            .query(&[(param, value)])
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?;

        response
            .json::<MealsResponse>()
            .await
            .with_context(|| format!("Failed to decode response from {}", url))
    }

    pub async fn search_by_first_letter(&self, letter: char) -> Result<MealsResponse> {
        self.get_meals(SEARCH_PATH, "f", &letter.to_string()).await
    }

    pub async fn search_by_name(&self, query: &str) -> Result<MealsResponse> {
        self.get_meals(SEARCH_PATH, "s", query).await
    }

    pub async fn lookup_by_id(&self, id: &str) -> Result<MealsResponse> {
        self.get_meals(LOOKUP_PATH, "i", id).await
    }
}
