//! Declarative input schemas for tools.
//!
//! A [`Schema`] is pure data: an ordered list of fields, each with a JSON
//! type, a required flag, an optional default and a description. It is
//! rendered to clients as a JSON Schema object and consumed by the
//! validator before any handler runs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// JSON types a schema field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl FieldType {
    /// Name used in JSON Schema and in validation errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Whether `value` has this runtime type. Integers count as numbers.
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_))
                | (Self::Number, Value::Number(_))
                | (Self::Boolean, Value::Bool(_))
                | (Self::Object, Value::Object(_))
                | (Self::Array, Value::Array(_))
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime JSON type name of a value, as reported in type mismatches.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single declared argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    pub description: String,
}

impl FieldSchema {
    /// Create an optional field with no default.
    pub fn new(name: impl Into<String>, field_type: FieldType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            default: None,
            description: description.into(),
        }
    }

    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FieldType::String, description)
    }

    pub fn number(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FieldType::Number, description)
    }

    pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FieldType::Boolean, description)
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the value filled in when the field is absent.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Ordered collection of declared fields.
///
/// Schemas are runtime data rather than derived from a Rust type, because
/// the validator walks the same declaration the client discovers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping declaration order.
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Render as a JSON Schema object (`type`, `properties`, `required`).
    pub fn to_json_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut property = Map::new();
            property.insert("type".to_string(), Value::from(field.field_type.as_str()));
            property.insert(
                "description".to_string(),
                Value::from(field.description.clone()),
            );
            if let Some(default) = &field.default {
                property.insert("default".to_string(), default.clone());
            }
            properties.insert(field.name.clone(), Value::Object(property));
        }

        let required: Vec<Value> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| Value::from(f.name.clone()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), Value::Array(required));
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_schema() -> Schema {
        Schema::new()
            .field(FieldSchema::string("query", "Search query").required())
            .field(FieldSchema::number("maxResults", "Maximum results").with_default(10))
    }

    #[test]
    fn test_field_type_matches() {
        assert!(FieldType::Number.matches(&json!(3)));
        assert!(FieldType::Number.matches(&json!(3.5)));
        assert!(!FieldType::Number.matches(&json!("3")));
        assert!(FieldType::Object.matches(&json!({})));
        assert!(!FieldType::String.matches(&Value::Null));
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&Value::Null), "null");
        assert_eq!(json_type_name(&json!([1, 2])), "array");
        assert_eq!(json_type_name(&json!(true)), "boolean");
    }

    #[test]
    fn test_to_json_schema() {
        let rendered = Value::Object(search_schema().to_json_schema());
        assert_eq!(
            rendered,
            json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Search query" },
                    "maxResults": {
                        "type": "number",
                        "description": "Maximum results",
                        "default": 10
                    }
                },
                "required": ["query"]
            })
        );
    }

    #[test]
    fn test_schema_preserves_order() {
        let schema = search_schema();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["query", "maxResults"]);
        assert!(schema.get("maxResults").is_some());
        assert!(schema.get("maxresults").is_none());
    }
}
