//! Tool-specific error types.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;
use tracing::warn;

use super::arguments::ArgumentError;

/// Errors that can occur during tool registration or execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A tool with this name is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateName(String),

    /// An argument was missing or had the wrong type.
    #[error(transparent)]
    InvalidArguments(#[from] ArgumentError),

    /// The arguments were well-formed but the operation refused them.
    #[error("{0}")]
    Rejected(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "rejected" error carrying the message shown to the client.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// Whether the client caused this error through its arguments.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArguments(_) | Self::Rejected(_))
    }

    /// Turn client errors into an error tool result; keep the rest as errors.
    pub fn into_call_result(self) -> Result<CallToolResult, ToolError> {
        if self.is_client_error() {
            warn!("{}", self);
            Ok(CallToolResult::error(vec![Content::text(self.to_string())]))
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_becomes_error_result() {
        let result = ToolError::rejected("cannot divide by zero")
            .into_call_result()
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_not_found_stays_an_error() {
        let result = ToolError::not_found("nope").into_call_result();
        assert!(matches!(result, Err(ToolError::NotFound(name)) if name == "nope"));
    }

    #[test]
    fn test_argument_error_message_is_passed_through() {
        let err: ToolError = ArgumentError::Missing {
            name: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "required argument \"x\" not found");
    }
}
