//! Family tree search tool.
//!
//! Searches for individuals in the FamilySearch family tree. Results come
//! from the mock dataset in `common.rs`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{
    DEFAULT_MAX_RESULTS, MOCK_DATA_NOTE, MOCK_PERSONS, clamp_max_results, format_lifespan,
};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolArguments, ToolHandler, ToolOutput, parse_arguments};
use crate::domains::tools::schema::{FieldSchema, Schema};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the family tree search tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFamilyTreeParams {
    /// Search query (name, place, etc.)
    pub query: String,

    /// Maximum number of results to return.
    #[serde(default = "default_max_results")]
    pub max_results: f64,
}

fn default_max_results() -> f64 {
    DEFAULT_MAX_RESULTS as f64
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Family tree search tool.
#[derive(Debug, Clone, Default)]
pub struct SearchFamilyTreeTool;

impl SearchFamilyTreeTool {
    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query))]
    pub fn execute(params: &SearchFamilyTreeParams) -> ToolOutput {
        info!("Searching family tree for: {}", params.query);

        let count = clamp_max_results(params.max_results, MOCK_PERSONS.len());

        let matches: Vec<String> = MOCK_PERSONS
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, person)| {
                format!(
                    "{}. {} {} - ID: {}\n",
                    i + 1,
                    person.name,
                    format_lifespan(person),
                    person.id
                )
            })
            .collect();

        let mut text = format!(
            "Search results for \"{}\" (placeholder - FamilySearch API integration needed):\n\n",
            params.query
        );
        text.push_str(&format!("Found {} potential matches:\n", count));
        text.push_str(&matches.join(""));
        text.push('\n');
        text.push_str(MOCK_DATA_NOTE);

        ToolOutput::text(text)
    }
}

impl ToolDefinition for SearchFamilyTreeTool {
    const NAME: &'static str = "search_family_tree";

    const DESCRIPTION: &'static str = "Search for individuals in FamilySearch family tree";

    fn schema() -> Schema {
        Schema::new()
            .field(FieldSchema::string("query", "Search query (name, place, etc.)").required())
            .field(
                FieldSchema::number("maxResults", "Maximum number of results to return")
                    .with_default(DEFAULT_MAX_RESULTS),
            )
    }
}

#[async_trait]
impl ToolHandler for SearchFamilyTreeTool {
    async fn call(&self, arguments: ToolArguments) -> Result<ToolOutput, ToolError> {
        let params: SearchFamilyTreeParams = parse_arguments(arguments)?;
        Ok(Self::execute(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_lines(output: &ToolOutput) -> usize {
        output.content[0]
            .as_text()
            .lines()
            .filter(|l| l.contains(" - ID: FS"))
            .count()
    }

    #[test]
    fn test_params_default_max_results() {
        let params: SearchFamilyTreeParams =
            serde_json::from_value(json!({ "query": "Smith" })).unwrap();
        assert_eq!(params.max_results, 10.0);
    }

    #[test]
    fn test_execute_limits_results() {
        let params = SearchFamilyTreeParams {
            query: "Smith".to_string(),
            max_results: 3.0,
        };
        let output = SearchFamilyTreeTool::execute(&params);
        let text = output.content[0].as_text();
        assert!(text.starts_with("Search results for \"Smith\""));
        assert!(text.contains("Found 3 potential matches"));
        assert_eq!(result_lines(&output), 3);
        assert!(text.ends_with(MOCK_DATA_NOTE));
    }

    #[test]
    fn test_execute_caps_at_available_records() {
        let params = SearchFamilyTreeParams {
            query: "Smith".to_string(),
            max_results: 10.0,
        };
        let output = SearchFamilyTreeTool::execute(&params);
        assert!(output.content[0].as_text().contains("Found 5 potential matches"));
        assert_eq!(result_lines(&output), 5);
    }

    #[test]
    fn test_output_layout() {
        let params = SearchFamilyTreeParams {
            query: "Smith".to_string(),
            max_results: 1.0,
        };
        let output = SearchFamilyTreeTool::execute(&params);
        assert_eq!(
            output.content[0].as_text(),
            format!(
                "Search results for \"Smith\" (placeholder - FamilySearch API integration needed):\n\n\
                 Found 1 potential matches:\n\
                 1. John Smith (1820-1890) - ID: FS123456\n\n{}",
                MOCK_DATA_NOTE
            )
        );
    }

    #[test]
    fn test_execute_zero_results() {
        let params = SearchFamilyTreeParams {
            query: "Smith".to_string(),
            max_results: 0.0,
        };
        let output = SearchFamilyTreeTool::execute(&params);
        assert_eq!(result_lines(&output), 0);
    }

    #[test]
    fn test_schema_declares_default() {
        let schema = SearchFamilyTreeTool::schema();
        let max_results = schema.get("maxResults").unwrap();
        assert!(!max_results.required);
        assert_eq!(max_results.default, Some(json!(10)));
        assert!(schema.get("query").unwrap().required);
    }

    #[tokio::test]
    async fn test_handler_call() {
        let mut args = ToolArguments::new();
        args.insert("query".to_string(), json!("Smith"));
        args.insert("maxResults".to_string(), json!(2));

        let output = SearchFamilyTreeTool::new().call(args).await.unwrap();
        assert_eq!(result_lines(&output), 2);
    }
}
