use crate::domain::{DomainError, entities::FavoriteSet, repositories::KeyValueStore};
use std::sync::Arc;

pub const FAVORITES_KEY: &str = "favorites";

/// Reads and writes the favorites set under its fixed key.
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Unreadable or malformed state reads as the empty set.
    pub fn load(&self) -> FavoriteSet {
        match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                let err = DomainError::Decode {
                    key: FAVORITES_KEY.to_string(),
                    reason: e.to_string(),
                };
                tracing::warn!("{}; treating favorites as empty", err);
                FavoriteSet::new()
            }),
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                tracing::warn!("Could not read favorites: {}", e);
                FavoriteSet::new()
            }
        }
    }

    pub fn save(&self, favorites: &FavoriteSet) -> Result<(), DomainError> {
        let raw = serde_json::to_string(favorites)
            .map_err(|e| DomainError::Storage(format!("failed to encode favorites: {}", e)))?;
        self.store.set(FAVORITES_KEY, &raw)
    }
}
