//! MCP server implementation using rmcp.
//!
//! Lists the Vaultix tool catalog and executes tool calls through the
//! dispatcher. Tool failures are reported inside the `CallToolResult`
//! (`is_error = true`) so the session survives them.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::*,
    service::{RequestContext, RoleServer},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::client::ApiClient;
use crate::tools::ToolRegistry;

/// MCP server that handles protocol requests and delegates to the dispatcher.
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    client: Arc<dyn ApiClient>,
}

impl McpServer {
    /// Create a new MCP server with the given tool registry and API client.
    pub fn new(tool_registry: Arc<ToolRegistry>, client: Arc<dyn ApiClient>) -> Self {
        Self {
            tool_registry,
            client,
        }
    }

    /// Run one tool and wrap the outcome for the MCP caller.
    ///
    /// Success yields the pretty-printed JSON response. Any error yields a
    /// pretty-printed `{error, message, code}` payload with `is_error` set.
    pub async fn execute(&self, name: &str, args: JsonObject) -> CallToolResult {
        match self
            .tool_registry
            .dispatch(self.client.as_ref(), name, args)
            .await
        {
            Ok(value) => CallToolResult::success(vec![Content::text(to_pretty_json(&value))]),
            Err(e) => {
                tracing::warn!(tool = name, code = e.code(), "Tool call failed: {}", e);
                CallToolResult::error(vec![Content::text(to_pretty_json(&e.to_mcp_payload()))])
            }
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities::builder().enable_tools().build()
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| "internal serialization error".to_string())
}

impl ServerHandler for McpServer {
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let result = ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
            ..Default::default()
        };
        std::future::ready(Ok(result))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        let tool_name = request.name.to_string();
        let args = request.arguments.unwrap_or_default();

        async move { Ok(self.execute(&tool_name, args).await) }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: Self::capabilities(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Vaultix payment API tools: charges, customers, refunds, balance, products, \
                 orders, transactions, payment links and payouts. Amounts are in cents."
                    .to_string(),
            ),
        }
    }
}

/// Serve the MCP Streamable HTTP endpoint at `/mcp` on `bind`.
pub async fn start_mcp_http(server: McpServer, bind: &str) -> Result<()> {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = Router::new()
        .nest_service("/mcp", service)
        .layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(bind).await?;

    tracing::info!("MCP HTTP server listening on http://{}/mcp", bind);

    axum::serve(listener, router).await?;

    Ok(())
}
