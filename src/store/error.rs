//! Store-specific error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while opening or querying the product store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[error("failed to connect database: {0}")]
    Connection(#[source] rusqlite::Error),

    /// The product schema could not be created.
    #[error("failed to migrate database: {0}")]
    Migration(#[source] rusqlite::Error),

    /// Sample products could not be inserted.
    #[error("failed to seed database: {0}")]
    Seed(#[source] rusqlite::Error),

    /// Products could not be read.
    #[error("failed to retrieve products: {0}")]
    Retrieval(#[source] rusqlite::Error),

    /// The caller gave up before the query ran.
    #[error("request cancelled")]
    Cancelled,
}
