//! Transport layer for the MCP server.
//!
//! Transports only move requests to the server and responses back:
//! - **STDIO**: Standard input/output (default for MCP) - feature: `stdio`
//! - **TCP**: One MCP session per TCP connection - feature: `tcp`
//! - **HTTP**: JSON-RPC over POST requests - feature: `http`
//!
//! Tool discovery and tool calls always end up in the dispatcher owned by
//! [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
