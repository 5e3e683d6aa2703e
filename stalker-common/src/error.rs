// ================================================================
// File: stalker-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not found error: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A status label outside the known set.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Settings error: {0}")]
    Settings(String),

    /// A change listener with the same id is already registered on a store.
    #[error("Listener error: {0}")]
    Listener(String),
}
