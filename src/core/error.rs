//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type over the tools domain and the
//! transport layer.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error raised by a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_tool_error_conversion() {
        let err: Error = ToolError::DuplicateTool("search_family_tree".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Tool error: Tool already registered: search_family_tree"
        );
    }

    #[test]
    fn test_transport_error_conversion() {
        let err: Error = TransportError::init("stdio unavailable").into();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.to_string().starts_with("Transport error:"));
    }
}
