use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    transport::stdio,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::archive::SearchError;
use crate::tools::{ToolError, ToolMetadata, ToolRegistry};

/// Instructions sent to the client during initialization.
pub const SERVER_INSTRUCTIONS: &str = "\
Norwegian Historical Archives Search Server provides access to centuries of Norwegian historical
documents (16th to 20th centuries).

Use this server whenever the user asks questions regarding Norwegian archival materials or history.

Search queries should be provided in Norwegian only!

Languages: Norwegian
Geographic scope: Norway and related historical territories";

/// MCP server exposing the archive search tools over stdio.
///
/// Holds no per-call state; concurrent invocations only share the HTTP client.
#[derive(Debug, Clone)]
pub struct ArchiveServer {
    registry: ToolRegistry,
}

impl ArchiveServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Tool definitions as advertised by `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        self.registry.definitions().into_iter().map(to_mcp_tool).collect()
    }

    /// Serve over stdin/stdout until the client disconnects or `shutdown` fires.
    pub async fn serve_stdio(self, shutdown: CancellationToken) -> Result<()> {
        log::info!(
            "Starting stdio server with tools: {}",
            self.registry.tool_names().join(", ")
        );

        let service = self
            .serve_with_ct(stdio(), shutdown)
            .await
            .inspect_err(|e| {
                log::error!("serving error: {e:?}");
            })?;
        let reason = service.waiting().await?;

        log::info!("Stdio server stopped: {reason:?}");
        Ok(())
    }
}

fn to_mcp_tool(meta: ToolMetadata) -> Tool {
    Tool::new(meta.name, meta.description, Arc::new(meta.input_schema))
}

/// Map a failed call onto the MCP error the client sees.
///
/// Caller mistakes are invalid params; upstream failures are internal errors.
pub fn to_mcp_error(err: &ToolError) -> McpError {
    match err {
        ToolError::UnknownTool(_)
        | ToolError::InvalidParams { .. }
        | ToolError::Search(SearchError::InvalidArgument(_)) => {
            McpError::invalid_params(err.to_string(), None)
        }
        ToolError::Search(SearchError::Transport { url, .. }) => McpError::internal_error(
            err.to_string(),
            Some(json!({ "kind": "transport", "url": url })),
        ),
        ToolError::Search(SearchError::ResponseFormat { url, .. }) => McpError::internal_error(
            err.to_string(),
            Some(json!({ "kind": "response_format", "url": url })),
        ),
    }
}

impl ServerHandler for ArchiveServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tool_name = request.name;
        let args = request.arguments.unwrap_or_default();

        log::debug!("Calling tool '{tool_name}'");

        match self.registry.call(&tool_name, args).await {
            Ok(records) => {
                log::debug!("Tool '{tool_name}' returned {} records", records.len());
                Ok(CallToolResult::success(vec![Content::json(&records)?]))
            }
            Err(e) => {
                log::warn!("Tool '{tool_name}' failed: {e}");
                Err(to_mcp_error(&e))
            }
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.tools();
        log::debug!("Serving {} tools", tools.len());
        Ok(ListToolsResult::with_all_items(tools))
    }
}
