//! Tool-specific error types.

use thiserror::Error;

use super::schema::FieldType;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] ValidationError),

    /// A tool with the same name was already registered.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// A declared default does not match the field's declared type.
    #[error("Invalid default for field '{field}' of tool '{tool}': expected {expected}")]
    InvalidDefault {
        tool: String,
        field: String,
        expected: FieldType,
    },

    /// The tool execution failed.
    #[error("{0}")]
    ExecutionFailed(String),

    /// The tool timed out during execution.
    #[error("Tool execution timed out")]
    Timeout,

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Reasons a call's arguments are rejected by the schema validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field marked `required` is absent.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// A declared field carries a value of the wrong JSON type.
    #[error("field '{field}' expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        actual: &'static str,
    },

    /// The arguments payload itself is not a JSON object.
    #[error("arguments must be an object, got {actual}")]
    NotAnObject { actual: &'static str },
}

impl ValidationError {
    /// The offending field, when the error concerns a single field.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::TypeMismatch { field, .. } => Some(field),
            Self::NotAnObject { .. } => None,
        }
    }

    /// Structured form of the error, attached to `InvalidParams` responses.
    pub fn to_data(&self) -> serde_json::Value {
        match self {
            Self::MissingField { field } => serde_json::json!({
                "reason": "missingField",
                "field": field,
            }),
            Self::TypeMismatch {
                field,
                expected,
                actual,
            } => serde_json::json!({
                "reason": "typeMismatch",
                "field": field,
                "expectedType": expected.as_str(),
                "actualType": actual,
            }),
            Self::NotAnObject { actual } => serde_json::json!({
                "reason": "notAnObject",
                "actualType": actual,
            }),
        }
    }
}
