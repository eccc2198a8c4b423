//! Tool handler abstraction.
//!
//! Every tool is a [`ToolHandler`]: it describes itself with an rmcp [`Tool`]
//! and turns a call's arguments into a [`CallToolResult`]. Argument and
//! business-rule failures are reported inside the result; only failures the
//! client did not cause come back as `Err`.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Content, Tool};

use super::arguments::Arguments;
use super::error::ToolError;
use crate::core::CallContext;

/// A callable tool.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Metadata and input schema of this tool.
    fn tool(&self) -> Tool;

    /// Execute the tool.
    async fn call(
        &self,
        ctx: &CallContext,
        arguments: Arguments,
    ) -> Result<CallToolResult, ToolError>;
}

/// Wrap the outcome of a text-producing tool into a call result.
pub fn text_result(outcome: Result<String, ToolError>) -> Result<CallToolResult, ToolError> {
    match outcome {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => e.into_call_result(),
    }
}
