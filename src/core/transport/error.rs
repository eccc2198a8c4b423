//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that end a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listening socket could not be bound.
    #[error("failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP handshake with the client failed.
    #[error("failed to start MCP session: {0}")]
    Session(String),

    /// The MCP session ended abnormally.
    #[error("MCP session failed: {0}")]
    Service(String),
}
