//! MCP server exposing the Vaultix payment API as agent tools.

pub mod client;
pub mod config;
pub mod error;
pub mod server;
pub mod tools;

pub use client::{ApiClient, ApiRequest, VaultixClient, build_url};
pub use config::VaultixConfig;
pub use error::{ErrorPayload, VaultixError};
pub use server::McpServer;
pub use tools::{Operation, ToolRegistry};

use std::sync::Arc;

/// Convenience function to create a fully configured MCP server.
///
/// Builds the HTTP client from `config`, registers the full tool catalog and
/// returns a `McpServer` that implements rmcp's `ServerHandler`.
pub fn create_server(config: &VaultixConfig) -> anyhow::Result<McpServer> {
    let client = VaultixClient::new(config)?;
    let tool_registry = Arc::new(ToolRegistry::new());

    tracing::info!(
        base_url = client.base_url(),
        tools = tool_registry.len(),
        "Vaultix tool registry ready"
    );

    Ok(McpServer::new(tool_registry, Arc::new(client)))
}
