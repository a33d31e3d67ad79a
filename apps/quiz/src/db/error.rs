//! Database error types.

use chd_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not create database directory: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DbError> for StoreError {
    fn from(e: DbError) -> Self {
        StoreError::Backend(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_store_backend_error() {
        let error: StoreError = DbError::Sqlite(rusqlite::Error::InvalidQuery).into();
        assert!(matches!(error, StoreError::Backend(_)));
        assert!(error.to_string().starts_with("store backend error: sqlite error"));
    }
}
