//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, request context, server lifecycle
//! management, and transport layer abstractions.

pub mod config;
pub mod context;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use context::CallContext;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::TransportConfig;
