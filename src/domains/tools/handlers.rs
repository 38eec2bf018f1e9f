//! Tool handler interface.
//!
//! Every registered tool is backed by a [`ToolHandler`]. The dispatcher only
//! ever calls a handler with arguments that already passed schema validation
//! and had their defaults filled in.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ToolError;

/// Arguments handed to a handler after validation.
pub type ToolArguments = Map<String, Value>;

/// A unit of handler output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// Output from a successful tool execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: Vec<ContentBlock>,
}

impl ToolOutput {
    pub fn new(content: Vec<ContentBlock>) -> Self {
        Self { content }
    }

    /// Output made of a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![ContentBlock::text(text)])
    }
}

/// Trait implemented by every tool.
///
/// A handler either produces a [`ToolOutput`] or fails with a [`ToolError`];
/// the dispatcher turns failures into an `InternalError` response.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with validated arguments.
    async fn call(&self, arguments: ToolArguments) -> Result<ToolOutput, ToolError>;
}

/// Deserialize validated arguments into a handler's typed parameters.
pub fn parse_arguments<T: DeserializeOwned>(arguments: ToolArguments) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::internal(format!("Failed to decode arguments: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_block_serialization() {
        let block = ContentBlock::text("hello");
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({ "type": "text", "text": "hello" })
        );
        assert_eq!(block.as_text(), "hello");
    }

    #[test]
    fn test_parse_arguments() {
        #[derive(Debug, Deserialize)]
        struct Params {
            name: String,
        }

        let mut args = ToolArguments::new();
        args.insert("name".to_string(), json!("Smith"));
        let params: Params = parse_arguments(args).unwrap();
        assert_eq!(params.name, "Smith");

        let err = parse_arguments::<Params>(ToolArguments::new()).unwrap_err();
        assert!(matches!(err, ToolError::Internal(_)));
    }
}
