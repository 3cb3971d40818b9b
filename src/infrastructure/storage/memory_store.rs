use crate::domain::{DomainError, repositories::KeyValueStore};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
