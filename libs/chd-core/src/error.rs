//! Error types for chd-core.

use thiserror::Error;

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading a case catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no cases")]
    EmptyCatalog,

    #[error("case at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("duplicate case id {id} at position {position}")]
    DuplicateId { id: String, position: usize },

    #[error("invalid catalog json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors raised by a key-value store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a saved session cannot be restored.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("malformed session snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
