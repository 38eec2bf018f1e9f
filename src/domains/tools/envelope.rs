//! Call request and call result envelopes.
//!
//! Every tool call produces exactly one [`CallResult`]: either content blocks
//! or a typed failure carrying a JSON-RPC error code.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::error::{ToolError, ValidationError};
use super::handlers::{ContentBlock, ToolOutput};
use super::schema::json_type_name;

/// A single tool invocation as received from a transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub tool_name: String,

    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl CallRequest {
    pub fn new(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }

    /// Build a request from a loosely-typed `arguments` payload.
    ///
    /// `null` is treated as no arguments; any other non-object is rejected.
    pub fn from_value(
        tool_name: impl Into<String>,
        arguments: Value,
    ) -> Result<Self, ValidationError> {
        match arguments {
            Value::Object(map) => Ok(Self::new(tool_name, map)),
            Value::Null => Ok(Self::new(tool_name, Map::new())),
            other => Err(ValidationError::NotAnObject {
                actual: json_type_name(&other),
            }),
        }
    }
}

/// Failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No tool is registered under the requested name.
    UnknownTool,
    /// The arguments violate the tool's schema.
    InvalidArguments,
    /// The handler failed.
    InternalError,
}

impl ErrorKind {
    /// JSON-RPC 2.0 error code.
    pub fn code(&self) -> i32 {
        match self {
            Self::UnknownTool => -32601,
            Self::InvalidArguments => -32602,
            Self::InternalError => -32603,
        }
    }

    /// Response-facing name of the code.
    pub fn code_name(&self) -> &'static str {
        match self {
            Self::UnknownTool => "MethodNotFound",
            Self::InvalidArguments => "InvalidParams",
            Self::InternalError => "InternalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code_name())
    }
}

/// Outcome of one tool call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    Success {
        content: Vec<ContentBlock>,
    },
    Failure {
        kind: ErrorKind,
        message: String,
        data: Option<Value>,
    },
}

/// Error object of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Serialized form of a [`CallResult`]: either `content` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl CallResult {
    pub fn success(output: ToolOutput) -> Self {
        Self::Success {
            content: output.content,
        }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
            data: None,
        }
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::failure(ErrorKind::UnknownTool, ToolError::not_found(name).to_string())
    }

    pub fn invalid_arguments(err: &ValidationError) -> Self {
        Self::Failure {
            kind: ErrorKind::InvalidArguments,
            message: format!("Invalid arguments: {}", err),
            data: Some(err.to_data()),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::failure(ErrorKind::InternalError, message)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Failure kind, if any.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Concatenated text of all content blocks (empty on failure).
    pub fn text(&self) -> String {
        match self {
            Self::Success { content } => content
                .iter()
                .map(ContentBlock::as_text)
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Failure { .. } => String::new(),
        }
    }

    pub fn to_response(&self) -> CallResponse {
        match self {
            Self::Success { content } => CallResponse {
                content: Some(content.clone()),
                error: None,
            },
            Self::Failure {
                kind,
                message,
                data,
            } => CallResponse {
                content: None,
                error: Some(ErrorBody {
                    code: kind.code(),
                    message: message.clone(),
                    data: data.clone(),
                }),
            },
        }
    }
}

impl From<ToolError> for CallResult {
    /// Map an error raised before invocation onto its failure kind.
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(name) => Self::unknown_tool(&name),
            ToolError::InvalidArguments(validation) => Self::invalid_arguments(&validation),
            other => Self::internal_error(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorKind::UnknownTool.code(), -32601);
        assert_eq!(ErrorKind::InvalidArguments.code(), -32602);
        assert_eq!(ErrorKind::InternalError.code(), -32603);
        assert_eq!(ErrorKind::UnknownTool.to_string(), "MethodNotFound");
    }

    #[test]
    fn test_success_response_shape() {
        let result = CallResult::success(ToolOutput::text("hello"));
        assert_eq!(
            serde_json::to_value(result.to_response()).unwrap(),
            json!({ "content": [{ "type": "text", "text": "hello" }] })
        );
    }

    #[test]
    fn test_failure_response_shape() {
        let result = CallResult::unknown_tool("does_not_exist");
        assert_eq!(
            serde_json::to_value(result.to_response()).unwrap(),
            json!({ "error": { "code": -32601, "message": "Unknown tool: does_not_exist" } })
        );
    }

    #[test]
    fn test_invalid_arguments_carries_reason() {
        let result = CallResult::invalid_arguments(&ValidationError::MissingField {
            field: "query".to_string(),
        });
        let response = result.to_response();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("query"));
        assert_eq!(error.data.unwrap()["field"], "query");
    }

    #[test]
    fn test_from_tool_error() {
        assert_eq!(
            CallResult::from(ToolError::not_found("x")).error_kind(),
            Some(ErrorKind::UnknownTool)
        );
        assert_eq!(
            CallResult::from(ToolError::Timeout).error_kind(),
            Some(ErrorKind::InternalError)
        );
    }

    #[test]
    fn test_call_request_from_value() {
        let req = CallRequest::from_value("t", json!({ "a": 1 })).unwrap();
        assert_eq!(req.arguments["a"], json!(1));

        let req = CallRequest::from_value("t", Value::Null).unwrap();
        assert!(req.arguments.is_empty());

        let err = CallRequest::from_value("t", json!([1])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject { actual: "array" });
    }
}
