//! Resources domain module.
//!
//! This module handles all resource-related functionality for the MCP server.
//! Resources represent data that can be read by MCP clients, such as
//! database records.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `handlers.rs` - `ResourceDefinition` metadata and `ResourceHandler` trait
//! - `registry.rs` - URI-keyed registry and lookup
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` and `ResourceHandler`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `ResourceRegistry::with_store()`

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::ResourceError;
pub use handlers::{ResourceDefinition, ResourceHandler};
pub use registry::ResourceRegistry;
