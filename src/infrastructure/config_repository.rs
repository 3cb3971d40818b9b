use crate::domain::entities::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "mealbook";

pub fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join(APP_DIR)
    } else {
        PathBuf::from(".")
    }
}

pub struct ConfigRepository {
    config_path: PathBuf,
}

impl ConfigRepository {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.json"))
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .context("Failed to read config file")?;

        let config = serde_json::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Loads the config, writing the defaults out first if no file exists yet.
    pub fn load_or_init(&self) -> Result<AppConfig> {
        if self.config_path.exists() {
            return self.load();
        }

        let config = AppConfig::default();
        self.save(&config)?;
        tracing::info!("Wrote default config to {}", self.config_path.display());
        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(config)
            .context("Failed to serialize config")?;

        fs::write(&self.config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Where the key-value store lives unless the config overrides it.
    pub fn storage_path(&self, config: &AppConfig) -> PathBuf {
        config
            .storage_path
            .clone()
            .unwrap_or_else(|| config_dir().join("storage.json"))
    }
}

impl Default for ConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repository = ConfigRepository::with_path(dir.path().join("config.json"));
        let config = repository.load().unwrap();
        assert_eq!(config.request_timeout_secs, AppConfig::default().request_timeout_secs);
    }

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let repository = ConfigRepository::with_path(path.clone());

        repository.load_or_init().unwrap();
        assert!(path.exists());
        assert_eq!(repository.load().unwrap().toast_duration_ms, 3000);
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let repository = ConfigRepository::with_path(dir.path().join("cfg").join("config.json"));

        let config = AppConfig {
            request_timeout_secs: 42,
            storage_path: Some(dir.path().join("store.json")),
            ..AppConfig::default()
        };
        repository.save(&config).unwrap();

        let loaded = repository.load().unwrap();
        assert_eq!(loaded.request_timeout_secs, 42);
        assert_eq!(repository.storage_path(&loaded), dir.path().join("store.json"));
    }
}
