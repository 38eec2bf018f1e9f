//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod familysearch;

pub use familysearch::{
    GetPersonDetailsParams, GetPersonDetailsTool, SearchFamilyTreeParams, SearchFamilyTreeTool,
};

use super::handlers::ToolHandler;
use super::registry::ToolDescriptor;
use super::schema::Schema;

/// Static metadata shared by every built-in tool.
///
/// Registering a type that implements this trait is all it takes to expose a
/// new tool; the dispatcher does not change.
pub trait ToolDefinition: ToolHandler + Default + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Declared input schema.
    fn schema() -> Schema;

    /// Build the registry descriptor for this tool.
    fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::schema())
    }
}
