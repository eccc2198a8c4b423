//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A name-keyed registry of tool handlers
//! - Dispatch of tool calls by name
//! - Tool metadata for listing

use rmcp::model::{CallToolResult, Tool};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::arguments::Arguments;
use super::definitions::{CalculateTool, HelloWorldTool};
use super::error::ToolError;
use super::handlers::ToolHandler;
use crate::core::CallContext;

/// Tool registry - maps tool names to their handlers.
///
/// Names are unique: registering a name twice fails instead of replacing
/// the earlier handler.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in tool.
    pub fn with_defaults() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register(Arc::new(HelloWorldTool))?;
        registry.register(Arc::new(CalculateTool))?;
        Ok(registry)
    }

    /// Register a tool under the name in its metadata.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) -> Result<(), ToolError> {
        let name = handler.tool().name.to_string();
        if self.tools.contains_key(&name) {
            return Err(ToolError::DuplicateName(name));
        }
        info!("Registering tool: {}", name);
        self.tools.insert(name, handler);
        Ok(())
    }

    /// Get all tool names, sorted.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Get all tools as Tool models (metadata), sorted by name.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.values().map(|handler| handler.tool()).collect()
    }

    /// Dispatch a tool call to the handler registered under `name`.
    ///
    /// The handler's result is returned unchanged; argument checking is the
    /// handler's job.
    pub async fn call(
        &self,
        name: &str,
        ctx: &CallContext,
        arguments: Arguments,
    ) -> Result<CallToolResult, ToolError> {
        let Some(handler) = self.tools.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };
        handler.call(ctx, arguments).await
    }
}
