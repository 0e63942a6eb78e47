use thiserror::Error;

/// Errors produced by [`RecordStore`](super::RecordStore) backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no record found for key '{name}'")]
    MissingKey { name: String },

    #[error("store lock poisoned")]
    Poisoned,
}
