//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool and resource registries.
//!
//! Tools are registered in `domains/tools/registry.rs`, resources in
//! `domains/resources/registry.rs`. **Adding a new tool or resource does NOT
//! require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::context::CallContext;
use super::error::Result;
use crate::domains::{
    resources::{ResourceError, ResourceRegistry},
    tools::{Arguments, ToolError, ToolRegistry},
};
use crate::store::ProductStore;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// protocol messages to the registries.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools.
    tools: Arc<ToolRegistry>,

    /// Registered resources.
    resources: Arc<ResourceRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the built-in tools and resources.
    pub fn new(config: Config, store: Arc<ProductStore>) -> Result<Self> {
        Ok(Self::with_registries(
            config,
            ToolRegistry::with_defaults()?,
            ResourceRegistry::with_store(store)?,
        ))
    }

    /// Open and seed the configured product store, then build the server.
    ///
    /// A store that cannot be opened or migrated is an error. A failed seed
    /// is only logged; the server starts over whatever the table holds.
    pub fn bootstrap(config: Config) -> Result<Self> {
        let store = ProductStore::open(&config.store.path)?;

        if let Err(e) = store.seed_if_empty() {
            warn!("Database seeding failed: {}", e);
        }

        Self::new(config, Arc::new(store))
    }

    /// Create a server over explicitly built registries.
    pub fn with_registries(
        config: Config,
        tools: ToolRegistry,
        resources: ResourceRegistry,
    ) -> Self {
        Self {
            config: Arc::new(config),
            tools: Arc::new(tools),
            resources: Arc::new(resources),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Dispatch a tool call by name.
    pub async fn dispatch_tool(
        &self,
        name: &str,
        ctx: &CallContext,
        arguments: Arguments,
    ) -> std::result::Result<CallToolResult, ToolError> {
        self.tools.call(name, ctx, arguments).await
    }

    /// Read a resource by URI.
    pub async fn dispatch_resource(
        &self,
        uri: &str,
        ctx: &CallContext,
    ) -> std::result::Result<ReadResourceResult, ResourceError> {
        self.resources.read(uri, ctx).await
    }
}

fn tool_error_to_mcp(e: ToolError) -> McpError {
    match e {
        ToolError::NotFound(_) => McpError::invalid_params(e.to_string(), None),
        _ => McpError::internal_error(e.to_string(), None),
    }
}

fn resource_error_to_mcp(e: ResourceError) -> McpError {
    match e {
        ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
        _ => McpError::internal_error(e.to_string(), None),
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Demo MCP server. Tools: hello_world, calculate. Resource: products://list."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let ctx = CallContext::new(context.ct.clone());
        let arguments = Arguments::new(request.arguments.unwrap_or_default());
        self.dispatch_tool(&request.name, &ctx, arguments)
            .await
            .map_err(tool_error_to_mcp)
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resources.resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        let ctx = CallContext::new(context.ct.clone());
        self.dispatch_resource(&request.uri, &ctx)
            .await
            .map_err(resource_error_to_mcp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::store::StoreError;
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use tokio_util::sync::CancellationToken;

    fn test_server() -> McpServer {
        let store = ProductStore::open_in_memory().unwrap();
        store.seed_if_empty().unwrap();
        McpServer::new(Config::default(), Arc::new(store)).unwrap()
    }

    async fn call(server: &McpServer, name: &str, arguments: Value) -> Value {
        let result = server
            .dispatch_tool(name, &CallContext::default(), Arguments::from_value(Some(arguments)))
            .await
            .unwrap();
        serde_json::to_value(result).unwrap()
    }

    #[test]
    fn test_server_info() {
        let info = test_server().get_info();
        assert_eq!(info.server_info.name, "Demo");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[tokio::test]
    async fn test_greeting_envelope() {
        let result = call(&test_server(), "hello_world", json!({ "name": "Ada" })).await;
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(result["content"][0]["text"], "Hello, Ada!");
    }

    #[tokio::test]
    async fn test_business_error_envelope() {
        let server = test_server();
        let result = call(&server, "calculate", json!({ "operation": "divide", "x": 5, "y": 0 })).await;
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "cannot divide by zero");

        let result = call(&server, "calculate", json!({ "operation": "pow", "x": 2, "y": 3 })).await;
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "unsupported operation: pow");
    }

    #[tokio::test]
    async fn test_missing_argument_envelope() {
        let result = call(&test_server(), "hello_world", json!({})).await;
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "required argument \"name\" not found");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let err = test_server()
            .dispatch_tool("nope", &CallContext::default(), Arguments::default())
            .await
            .unwrap_err();
        let mcp = tool_error_to_mcp(err);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(mcp.message, "Tool not found: nope");
    }

    #[tokio::test]
    async fn test_read_products() {
        let result = test_server()
            .dispatch_resource("products://list", &CallContext::default())
            .await
            .unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["contents"][0]["uri"], "products://list");
        assert_eq!(value["contents"][0]["mimeType"], "application/json");
        let rows: Value =
            serde_json::from_str(value["contents"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_read_unknown_resource() {
        let err = test_server()
            .dispatch_resource("products://missing", &CallContext::default())
            .await
            .unwrap_err();
        assert_eq!(resource_error_to_mcp(err).code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cancelled_read_is_internal_error() {
        let ct = CancellationToken::new();
        ct.cancel();
        let err = test_server()
            .dispatch_resource("products://list", &CallContext::new(ct))
            .await
            .unwrap_err();
        assert_eq!(resource_error_to_mcp(err).code, ErrorCode::INTERNAL_ERROR);
    }

    fn config_at(path: std::path::PathBuf) -> Config {
        let mut config = Config::default();
        config.store.path = path;
        config
    }

    #[tokio::test]
    async fn test_bootstrap_seeds_new_database() {
        let dir = TempDir::new().unwrap();
        let server = McpServer::bootstrap(config_at(dir.path().join("products.db"))).unwrap();

        let result = server
            .dispatch_resource("products://list", &CallContext::default())
            .await
            .unwrap();
        let value = serde_json::to_value(&result).unwrap();
        let rows: Value =
            serde_json::from_str(value["contents"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(rows[0]["Code"], "D42");
        assert_eq!(rows[1]["Code"], "P99");
    }

    #[test]
    fn test_bootstrap_fails_when_store_cannot_open() {
        let dir = TempDir::new().unwrap();
        let result = McpServer::bootstrap(config_at(dir.path().to_path_buf()));
        assert!(matches!(
            result,
            Err(Error::Store(StoreError::Connection(_) | StoreError::Migration(_)))
        ));
    }

    #[tokio::test]
    async fn test_bootstrap_survives_failed_seed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("legacy.db");
        {
            // Schema creation is a no-op on this table, but inserts fail.
            let conn = rusqlite::Connection::open(&path).unwrap();
            conn.execute_batch("CREATE TABLE products (id INTEGER PRIMARY KEY, deleted_at TEXT);")
                .unwrap();
        }

        let server = McpServer::bootstrap(config_at(path)).unwrap();
        assert_eq!(server.tools.tool_names(), vec!["calculate", "hello_world"]);

        let result = call(&server, "hello_world", json!({ "name": "Ada" })).await;
        assert_eq!(result["content"][0]["text"], "Hello, Ada!");
    }
}
