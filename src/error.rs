//! Error types for Vaultix tool dispatch.
//!
//! Every failure a tool call can hit ends up as a [`VaultixError`]. The MCP
//! boundary turns it into an [`ErrorPayload`] so the caller always receives a
//! structured result instead of a protocol-level failure.

use std::fmt;

use serde::Serialize;

/// Message used when the remote error body carries no `error.message`.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "API request failed";

/// Code used when the remote error body carries no `error.code`.
pub const DEFAULT_API_ERROR_CODE: &str = "api_error";

/// Code reported for failures that did not come from the remote API.
pub const UNKNOWN_ERROR_CODE: &str = "unknown_error";

/// Errors that can occur while dispatching a tool call.
#[derive(Debug, Clone, PartialEq)]
pub enum VaultixError {
    /// The tool name is not part of the catalog.
    UnknownTool(String),

    /// The remote API answered with a non-success status.
    Api {
        message: String,
        code: String,
        status: u16,
    },

    /// The response payload was not valid JSON.
    Decode(String),

    /// The request could not be sent or the response could not be read.
    Transport(String),
}

impl VaultixError {
    /// The machine-readable code surfaced to the caller.
    pub fn code(&self) -> &str {
        match self {
            Self::Api { code, .. } => code,
            Self::UnknownTool(_) | Self::Decode(_) | Self::Transport(_) => UNKNOWN_ERROR_CODE,
        }
    }

    /// HTTP status of a remote failure, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Convert this error into the payload returned from `call_tool`.
    pub fn to_mcp_payload(&self) -> ErrorPayload {
        let message = match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        };
        ErrorPayload {
            error: true,
            message,
            code: self.code().to_string(),
        }
    }
}

impl fmt::Display for VaultixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "Unknown tool: {}", name),
            Self::Api {
                message, status, ..
            } => write!(f, "{} (HTTP {})", message, status),
            Self::Decode(msg) => write!(f, "Failed to decode response: {}", msg),
            Self::Transport(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for VaultixError {}

impl From<reqwest::Error> for VaultixError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Structured error body returned to the agent host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    pub error: bool,
    pub message: String,
    pub code: String,
}
