//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `arguments.rs` - Typed extraction of call arguments
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Name-keyed registry and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolHandler` for it
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `ToolRegistry::with_defaults()`

mod arguments;
pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use arguments::{ArgumentError, Arguments};
pub use error::ToolError;
pub use handlers::{ToolHandler, text_result};
pub use registry::ToolRegistry;
