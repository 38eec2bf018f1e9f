//! Argument validation against a tool's declared schema.

use serde_json::{Map, Value};
use tracing::debug;

use super::error::ValidationError;
use super::schema::{Schema, json_type_name};

/// Check `arguments` against `schema` and return the defaulted argument set.
///
/// Required fields are checked first, in declaration order, then the type of
/// every declared field that is present. Undeclared fields are passed through
/// unchanged. The input is never mutated.
pub fn validate(
    arguments: &Map<String, Value>,
    schema: &Schema,
) -> Result<Map<String, Value>, ValidationError> {
    if let Some(missing) = schema
        .fields()
        .iter()
        .find(|f| f.required && !arguments.contains_key(&f.name))
    {
        return Err(ValidationError::MissingField {
            field: missing.name.clone(),
        });
    }

    for field in schema.fields() {
        if let Some(value) = arguments.get(&field.name) {
            if !field.field_type.matches(value) {
                return Err(ValidationError::TypeMismatch {
                    field: field.name.clone(),
                    expected: field.field_type,
                    actual: json_type_name(value),
                });
            }
        }
    }

    let mut validated = arguments.clone();
    for field in schema.fields() {
        if let Some(default) = &field.default {
            if !validated.contains_key(&field.name) {
                debug!("Filling default for '{}'", field.name);
                validated.insert(field.name.clone(), default.clone());
            }
        }
    }

    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::{FieldSchema, FieldType};
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new()
            .field(FieldSchema::string("query", "Search query").required())
            .field(FieldSchema::number("maxResults", "Maximum results").with_default(10))
            .field(FieldSchema::boolean("exact", "Exact match only"))
    }

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_missing_required_field() {
        let err = validate(&Map::new(), &schema()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "query".to_string()
            }
        );
    }

    #[test]
    fn test_missing_field_reported_before_type_mismatch() {
        let input = args(json!({ "maxResults": "ten" }));
        let err = validate(&input, &schema()).unwrap_err();
        assert_eq!(err.field(), Some("query"));
        assert!(matches!(err, ValidationError::MissingField { .. }));
    }

    #[test]
    fn test_type_mismatch() {
        let input = args(json!({ "query": "Smith", "maxResults": "3" }));
        let err = validate(&input, &schema()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                field: "maxResults".to_string(),
                expected: FieldType::Number,
                actual: "string",
            }
        );
    }

    #[test]
    fn test_null_is_a_type_mismatch() {
        let input = args(json!({ "query": null }));
        let err = validate(&input, &schema()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TypeMismatch { actual: "null", .. }
        ));
    }

    #[test]
    fn test_default_filled_when_absent() {
        let input = args(json!({ "query": "Smith" }));
        let validated = validate(&input, &schema()).unwrap();
        assert_eq!(validated["maxResults"], json!(10));
        assert!(!validated.contains_key("exact"));
        // input untouched
        assert!(!input.contains_key("maxResults"));
    }

    #[test]
    fn test_explicit_value_not_overridden() {
        let input = args(json!({ "query": "Smith", "maxResults": 3 }));
        let validated = validate(&input, &schema()).unwrap();
        assert_eq!(validated["maxResults"], json!(3));
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let input = args(json!({ "query": "Smith", "place": ["Ohio", 1850] }));
        let validated = validate(&input, &schema()).unwrap();
        assert_eq!(validated["place"], json!(["Ohio", 1850]));
    }

    #[test]
    fn test_float_accepted_as_number() {
        let input = args(json!({ "query": "Smith", "maxResults": 2.5 }));
        assert!(validate(&input, &schema()).is_ok());
    }
}
