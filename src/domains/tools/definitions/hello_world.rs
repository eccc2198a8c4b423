//! Greeting tool.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::CallContext;
use crate::domains::tools::{Arguments, ToolError, ToolHandler, text_result};

/// Parameters for the greeting tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HelloWorldParams {
    /// Name of the person to greet.
    #[schemars(description = "Name of the person to greet")]
    pub name: String,
}

/// Says hello to someone.
#[derive(Debug, Clone, Default)]
pub struct HelloWorldTool;

impl HelloWorldTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "hello_world";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Say hello to someone";

    /// Build the greeting from the call arguments.
    pub fn execute(arguments: &Arguments) -> Result<String, ToolError> {
        let name = arguments.require_string("name")?;
        Ok(format!("Hello, {}!", name))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<HelloWorldParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[async_trait]
impl ToolHandler for HelloWorldTool {
    fn tool(&self) -> Tool {
        Self::to_tool()
    }

    #[instrument(skip_all, name = "hello_world")]
    async fn call(
        &self,
        _ctx: &CallContext,
        arguments: Arguments,
    ) -> Result<CallToolResult, ToolError> {
        info!("Greeting tool called");
        text_result(Self::execute(&arguments))
    }
}
