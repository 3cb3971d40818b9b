mod application;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod testing;

use anyhow::{Result, anyhow};
use application::UseCaseContainer;
use domain::entities::AppConfig;
use domain::repositories::{KeyValueStore, RecipeRepository};
use infrastructure::ConfigRepository;
use infrastructure::mealdb::{MealDbClient, MealDbRecipeRepository};
use infrastructure::storage::{JsonFileStore, MemoryStore};
use presentation::components::ToastQueue;
use presentation::services::AsyncExecutor;
use presentation::services::log_capture::init_log_capture;
use presentation::style::configure_style;
use presentation::ui::MealbookApp;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let log_rx = init_log_capture()?;

    let config_repository = ConfigRepository::new();
    let config = config_repository.load_or_init().unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {:#}", e);
        AppConfig::default()
    });

    let client = MealDbClient::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let repository: Arc<dyn RecipeRepository> = Arc::new(MealDbRecipeRepository::new(client));
    let use_cases = Arc::new(UseCaseContainer::new(repository));

    let storage_path = config_repository.storage_path(&config);
    let store: Arc<dyn KeyValueStore> = match JsonFileStore::open(&storage_path) {
        Ok(store) => {
            tracing::info!("Favorites stored in {}", store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("Falling back to in-memory storage: {:#}", e);
            Arc::new(MemoryStore::new())
        }
    };

    let executor = AsyncExecutor::new()?;
    let toasts = ToastQueue::new(Duration::from_millis(config.toast_duration_ms));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mealbook",
        options,
        Box::new(move |cc| {
            configure_style(&cc.egui_ctx);
            Ok(Box::new(MealbookApp::new(
                use_cases, store, executor, toasts, log_rx,
            )))
        }),
    )
    .map_err(|e| anyhow!("Failed to run application: {}", e))
}
