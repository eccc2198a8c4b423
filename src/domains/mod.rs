//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: MCP tools that can be executed by clients
//! - **resources**: Data resources that can be read by clients

pub mod resources;
pub mod tools;
