use crate::application::view_model::RequestToken;
use crate::domain::entities::Recipe;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Result slot written by a background task and drained by the frame loop.
pub type Slot<T> = Arc<Mutex<Option<T>>>;

pub fn slot<T>() -> Slot<T> {
    Arc::new(Mutex::new(None))
}

fn take_finished<T>(slot: &Slot<T>) -> Option<T> {
    slot.try_lock().ok().and_then(|mut guard| guard.take())
}

pub enum AsyncTask {
    LoadRecipes {
        token: RequestToken,
        result: Slot<anyhow::Result<Vec<Recipe>>>,
        started_at: Instant,
    },
    LookupRecipe {
        token: RequestToken,
        result: Slot<anyhow::Result<Option<Recipe>>>,
    },
    ResolveFavorite {
        id: String,
        result: Slot<anyhow::Result<Option<Recipe>>>,
    },
}

#[derive(Default)]
pub struct TaskResult {
    pub loaded_recipes: Vec<(RequestToken, anyhow::Result<Vec<Recipe>>)>,
    pub lookups: Vec<(RequestToken, anyhow::Result<Option<Recipe>>)>,
    pub resolved_favorites: Vec<(String, anyhow::Result<Option<Recipe>>)>,
}

pub struct AsyncTaskManager {
    active_tasks: Vec<AsyncTask>,
}

impl AsyncTaskManager {
    pub fn new() -> Self {
        Self {
            active_tasks: Vec::new(),
        }
    }

    pub fn track(&mut self, task: AsyncTask) {
        if let AsyncTask::ResolveFavorite { id, .. } = &task {
            if self.is_resolving(id) {
                tracing::debug!("Already resolving favorite {}, ignoring duplicate", id);
                return;
            }
        }
        self.active_tasks.push(task);
    }

    pub fn pending_count(&self) -> usize {
        self.active_tasks.len()
    }

    pub fn is_resolving(&self, favorite_id: &str) -> bool {
        self.active_tasks.iter().any(|task| match task {
            AsyncTask::ResolveFavorite { id, .. } => id == favorite_id,
            _ => false,
        })
    }

    /// Collects every finished task; unfinished or momentarily locked ones stay tracked.
    pub fn poll(&mut self) -> TaskResult {
        let mut result = TaskResult::default();
        let mut tasks_to_keep = Vec::new();

        for task in self.active_tasks.drain(..) {
            match task {
                AsyncTask::LoadRecipes {
                    token,
                    result: slot,
                    started_at,
                } => match take_finished(&slot) {
                    Some(outcome) => {
                        tracing::debug!(
                            "Recipe load {:?} finished after {:?}",
                            token,
                            started_at.elapsed()
                        );
                        result.loaded_recipes.push((token, outcome));
                    }
                    None => tasks_to_keep.push(AsyncTask::LoadRecipes {
                        token,
                        result: slot,
                        started_at,
                    }),
                },
                AsyncTask::LookupRecipe {
                    token,
                    result: slot,
                } => match take_finished(&slot) {
                    Some(outcome) => result.lookups.push((token, outcome)),
                    None => tasks_to_keep.push(AsyncTask::LookupRecipe {
                        token,
                        result: slot,
                    }),
                },
                AsyncTask::ResolveFavorite { id, result: slot } => match take_finished(&slot) {
                    Some(outcome) => result.resolved_favorites.push((id, outcome)),
                    None => tasks_to_keep.push(AsyncTask::ResolveFavorite { id, result: slot }),
                },
            }
        }

        self.active_tasks = tasks_to_keep;
        result
    }
}

impl Default for AsyncTaskManager {
    fn default() -> Self {
        Self::new()
    }
}
