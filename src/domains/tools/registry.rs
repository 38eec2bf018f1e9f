//! Tool Registry - central registration and lookup for all tools.
//!
//! This module provides:
//! - The catalog of tool descriptors, in registration order
//! - Name-based lookup of the handler behind each descriptor
//!
//! The registry is populated once at startup and is read-only afterwards.
//! When adding a new tool:
//! 1. Create the tool file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `with_builtin_tools()`

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;
use tracing::debug;

use super::definitions::{GetPersonDetailsTool, SearchFamilyTreeTool, ToolDefinition};
use super::error::ToolError;
use super::handlers::ToolHandler;
use super::schema::Schema;

/// Static description of a registered tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Schema,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Schema) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Discovery representation (`name`, `description`, `inputSchema`).
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema.to_json_schema(),
        })
    }

    /// Create a Tool model for this descriptor (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: Arc::new(self.input_schema.to_json_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// A descriptor paired with the handler that implements it.
#[derive(Clone)]
pub struct RegisteredTool {
    pub descriptor: ToolDescriptor,
    pub handler: Arc<dyn ToolHandler>,
}

/// Tool registry - manages all available tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in tool.
    ///
    /// This is the central place where all tools are registered.
    pub fn with_builtin_tools() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register_definition::<SearchFamilyTreeTool>()?;
        registry.register_definition::<GetPersonDetailsTool>()?;
        Ok(registry)
    }

    /// Register a tool defined through [`ToolDefinition`].
    pub fn register_definition<T: ToolDefinition>(&mut self) -> Result<(), ToolError> {
        self.register(T::descriptor(), Arc::new(T::default()))
    }

    /// Register a descriptor + handler pair.
    ///
    /// Fails on a duplicate name or on a default value whose type disagrees
    /// with its field.
    pub fn register(
        &mut self,
        descriptor: ToolDescriptor,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<(), ToolError> {
        if self.index.contains_key(&descriptor.name) {
            return Err(ToolError::DuplicateTool(descriptor.name));
        }

        for field in descriptor.input_schema.fields() {
            if let Some(default) = &field.default {
                if !field.field_type.matches(default) {
                    return Err(ToolError::InvalidDefault {
                        tool: descriptor.name.clone(),
                        field: field.name.clone(),
                        expected: field.field_type,
                    });
                }
            }
        }

        debug!("Registering tool: {}", descriptor.name);
        self.index.insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool { descriptor, handler });
        Ok(())
    }

    /// All descriptors, in registration order.
    pub fn list_tools(&self) -> Vec<&ToolDescriptor> {
        self.tools.iter().map(|t| &t.descriptor).collect()
    }

    /// Exact, case-sensitive lookup of a descriptor.
    pub fn get_tool(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.resolve(name).map(|t| &t.descriptor)
    }

    /// Lookup of the descriptor together with its handler.
    pub fn resolve(&self, name: &str) -> Result<&RegisteredTool, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.descriptor.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
