use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;

/// Owns the tokio runtime that network work runs on, so the UI thread never blocks.
pub struct AsyncExecutor {
    runtime: Arc<tokio::runtime::Runtime>,
}

impl AsyncExecutor {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.runtime.spawn(future);
    }
}

impl Clone for AsyncExecutor {
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
        }
    }
}
