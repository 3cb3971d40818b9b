use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("search query is empty")]
    EmptyQuery,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("failed to decode stored value for key '{key}': {reason}")]
    Decode { key: String, reason: String },
}
