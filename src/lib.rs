//! Product demo MCP server library.
//!
//! A small Model Context Protocol server exposing two tools and one resource:
//!
//! - `hello_world`: greets someone by name
//! - `calculate`: add, subtract, multiply or divide two numbers
//! - `products://list`: the product table as JSON
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, request context, the rmcp
//!   server handler and transports
//! - **domains**: tool and resource handlers with their registries
//! - **store**: the SQLite-backed product store
//!
//! # Example
//!
//! ```rust,no_run
//! use product_mcp_server::core::{Config, McpServer, transport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::bootstrap(config.clone())?;
//!     transport::serve(config.transport, server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod store;

// Re-export commonly used types for convenience
pub use self::core::{Config, Error, McpServer, Result};
