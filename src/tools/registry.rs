//! Tool registry and dispatcher.
//!
//! The registry indexes the static operation table by name. Dispatch is a
//! lookup plus one call to the [`ApiClient`]; no operation has bespoke code.

use std::collections::HashMap;

use rmcp::model::{JsonObject, Tool as McpTool};
use serde_json::Value;
use tracing::debug;

use super::catalog::CATALOG;
use super::operation::Operation;
use crate::client::ApiClient;
use crate::error::VaultixError;

/// Registry of the operations exposed as tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    operations: &'static [Operation],
    by_name: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create a registry over the full Vaultix catalog.
    pub fn new() -> Self {
        Self::from_operations(CATALOG)
    }

    /// Create a registry over an arbitrary operation table.
    pub fn from_operations(operations: &'static [Operation]) -> Self {
        let by_name = operations
            .iter()
            .enumerate()
            .map(|(index, op)| (op.name, index))
            .collect();
        Self {
            operations,
            by_name,
        }
    }

    /// Get an operation by tool name.
    pub fn get(&self, name: &str) -> Option<&'static Operation> {
        self.by_name
            .get(name)
            .and_then(|&index| self.operations.get(index))
    }

    /// Get all tools as `McpTool` instances for `list_tools`.
    pub fn list_tools(&self) -> Vec<McpTool> {
        self.operations.iter().map(Operation::to_mcp_tool).collect()
    }

    /// Execute a tool by name against `client`.
    ///
    /// Unknown names fail before the client is touched. Whatever the client
    /// returns is handed back unchanged.
    pub async fn dispatch(
        &self,
        client: &dyn ApiClient,
        name: &str,
        args: JsonObject,
    ) -> Result<Value, VaultixError> {
        let operation = self
            .get(name)
            .ok_or_else(|| VaultixError::UnknownTool(name.to_string()))?;

        let request = operation.build_request(&args);
        debug!(tool = name, method = %request.method, path = %request.path, "Dispatching tool call");

        client.send(request).await
    }

    /// Check if a tool with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Return the number of registered tools.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Return `true` if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
