//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool discovery and tool calls to the
//! [`Dispatcher`].
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered in `domains/tools/registry.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{CallRequest, CallResult, ContentBlock, Dispatcher, ToolRegistry};

/// Instructions reported to clients on initialization.
pub const INSTRUCTIONS: &str = "FamilySearch MCP server. Use search_family_tree to find individuals \
     in the family tree and get_person_details to look up a person by ID.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It owns its
/// dispatcher; several servers can live side by side in one process.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher for tool discovery and tool calls.
    dispatcher: Arc<Dispatcher>,
}

impl McpServer {
    /// Create a new MCP server with the built-in tools.
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::with_builtin_tools()?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an explicitly populated registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        let dispatcher =
            Dispatcher::new(Arc::new(registry)).with_timeout(config.tools.call_timeout());

        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
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

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// List all available tools in discovery form (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .list_tools()
            .into_iter()
            .map(|t| t.to_json())
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> CallResult {
        self.dispatcher.call_tool(name, arguments).await
    }
}

/// Convert a dispatcher outcome into the rmcp response type.
pub fn to_mcp_result(result: CallResult) -> std::result::Result<CallToolResult, McpError> {
    match result {
        CallResult::Success { content } => Ok(CallToolResult::success(
            content
                .into_iter()
                .map(|block| match block {
                    ContentBlock::Text { text } => Content::text(text),
                })
                .collect(),
        )),
        CallResult::Failure {
            kind,
            message,
            data,
        } => Err(McpError::new(ErrorCode(kind.code()), message, data)),
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
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
        let tools = self
            .dispatcher
            .list_tools()
            .into_iter()
            .map(|t| t.to_tool())
            .collect();
        Ok(ListToolsResult {
            tools,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let call = CallRequest::new(
            request.name.to_string(),
            request.arguments.unwrap_or_default(),
        );
        to_mcp_result(self.dispatcher.dispatch(call).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ErrorKind;
    use serde_json::json;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_list_tools_discovery_shape() {
        let tools = server().list_tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "search_family_tree");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["query"]));
        assert_eq!(
            tools[0]["inputSchema"]["properties"]["maxResults"]["default"],
            json!(10)
        );
        assert_eq!(tools[1]["name"], "get_person_details");
    }

    #[tokio::test]
    async fn test_search_with_max_results() {
        let result = server()
            .call_tool("search_family_tree", json!({ "query": "Smith", "maxResults": 3 }))
            .await;
        assert!(result.is_success());
        let text = result.text();
        assert_eq!(text.lines().filter(|l| l.contains(" - ID: FS")).count(), 3);
    }

    #[tokio::test]
    async fn test_search_default_max_results() {
        let result = server()
            .call_tool("search_family_tree", json!({ "query": "Smith" }))
            .await;
        assert!(result.is_success());
        assert!(result.text().contains("Found 5 potential matches"));
    }

    #[tokio::test]
    async fn test_search_missing_query() {
        let result = server().call_tool("search_family_tree", json!({})).await;
        match result {
            CallResult::Failure { kind, message, .. } => {
                assert_eq!(kind, ErrorKind::InvalidArguments);
                assert!(message.contains("query"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_person_details() {
        let result = server()
            .call_tool("get_person_details", json!({ "personId": "FS123456" }))
            .await;
        assert!(result.is_success());
        assert!(result.text().contains("FS123456"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let result = server().call_tool("does_not_exist", json!({})).await;
        assert_eq!(result.error_kind(), Some(ErrorKind::UnknownTool));
    }

    #[test]
    fn test_to_mcp_result_success() {
        let result = to_mcp_result(CallResult::Success {
            content: vec![ContentBlock::text("hello")],
        })
        .unwrap();
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_to_mcp_result_error_codes() {
        let err = to_mcp_result(CallResult::unknown_tool("nope")).unwrap_err();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);

        let err = to_mcp_result(CallResult::internal_error("boom")).unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn test_server_info_advertises_tools() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert_eq!(info.server_info.name, "familysearch-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_server_info_follows_config() {
        let mut config = Config::default();
        config.server.name = "genealogy-test".to_string();
        let info = McpServer::new(config).unwrap().get_info();
        assert_eq!(info.server_info.name, "genealogy-test");
    }
}
