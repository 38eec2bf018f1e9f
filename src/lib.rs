//! FamilySearch MCP Server Library
//!
//! This crate exposes genealogy tools over the Model Context Protocol (MCP).
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool registry, schema validation and call dispatch, plus the
//!     FamilySearch tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use familysearch_mcp_server::{Config, McpServer};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     let result = server
//!         .call_tool("search_family_tree", json!({ "query": "Smith", "maxResults": 3 }))
//!         .await;
//!     println!("{}", result.text());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
