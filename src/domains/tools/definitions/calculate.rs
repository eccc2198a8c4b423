//! Calculator tool.
//!
//! Applies one of four arithmetic operations to two numbers and returns the
//! result with exactly two decimals.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument};

use crate::core::CallContext;
use crate::domains::tools::{Arguments, ToolError, ToolHandler, text_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation. Division by zero is refused.
    pub fn apply(self, x: f64, y: f64) -> Result<f64, ToolError> {
        match self {
            Self::Add => Ok(x + y),
            Self::Subtract => Ok(x - y),
            Self::Multiply => Ok(x * y),
            Self::Divide if y == 0.0 => Err(ToolError::rejected("cannot divide by zero")),
            Self::Divide => Ok(x / y),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(ToolError::rejected(format!(
                "unsupported operation: {}",
                other
            ))),
        }
    }
}

/// Parameters for the calculator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateParams {
    /// The operation to perform.
    #[schemars(description = "The operation to perform (add, subtract, multiply, divide)")]
    pub operation: Operation,

    /// First operand.
    #[schemars(description = "First number")]
    pub x: f64,

    /// Second operand.
    #[schemars(description = "Second number")]
    pub y: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Calculator tool - basic arithmetic on two numbers.
#[derive(Debug, Clone, Default)]
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Perform basic arithmetic operations";

    /// Validate the arguments and compute the formatted result.
    pub fn execute(arguments: &Arguments) -> Result<String, ToolError> {
        let operation = arguments.require_string("operation")?;
        let x = arguments.require_number("x")?;
        let y = arguments.require_number("y")?;

        let result = operation.parse::<Operation>()?.apply(x, y)?;
        Ok(format_result(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CalculateParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[async_trait]
impl ToolHandler for CalculateTool {
    fn tool(&self) -> Tool {
        Self::to_tool()
    }

    #[instrument(skip_all, name = "calculate")]
    async fn call(
        &self,
        _ctx: &CallContext,
        arguments: Arguments,
    ) -> Result<CallToolResult, ToolError> {
        info!("Calculator tool called");
        text_result(Self::execute(&arguments))
    }
}

/// Fixed two-decimal rendering, independent of locale.
fn format_result(value: f64) -> String {
    format!("{:.2}", value)
}

// ============================================================================
// Tests
// ============================================================================
