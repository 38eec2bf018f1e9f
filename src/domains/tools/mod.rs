//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are named operations with declared input schemas that MCP clients
//! can discover and call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `schema.rs` - Declarative input schemas
//! - `validator.rs` - Argument validation and default filling
//! - `registry.rs` - Central tool registry (descriptor + handler per name)
//! - `dispatcher.rs` - Resolve, validate, invoke, normalize
//! - `envelope.rs` - Call request / call result types
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolDefinition` and `ToolHandler`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify the dispatcher or `server.rs`!**

pub mod definitions;
mod dispatcher;
mod envelope;
mod error;
mod handlers;
mod registry;
pub mod schema;
mod validator;

pub use dispatcher::Dispatcher;
pub use envelope::{CallRequest, CallResponse, CallResult, ErrorBody, ErrorKind};
pub use error::{ToolError, ValidationError};
pub use handlers::{ContentBlock, ToolArguments, ToolHandler, ToolOutput, parse_arguments};
pub use registry::{RegisteredTool, ToolDescriptor, ToolRegistry};
pub use schema::{FieldSchema, FieldType, Schema};
pub use validator::validate;
