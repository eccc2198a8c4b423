//! Unified error type.
//!
//! Each layer has its own error enum; `Error` wraps whichever one surfaced
//! while building the server. Transports report their own `TransportError`.

use thiserror::Error;

use crate::domains::{resources::ResourceError, tools::ToolError};
use crate::store::StoreError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
