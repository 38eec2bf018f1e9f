//! Person details tool.
//!
//! Returns details about a specific person, looked up by FamilySearch
//! person ID in the mock dataset.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::common::{MOCK_DATA_NOTE, find_person};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolArguments, ToolHandler, ToolOutput, parse_arguments};
use crate::domains::tools::schema::{FieldSchema, Schema};

/// Parameters for the person details tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPersonDetailsParams {
    /// FamilySearch person ID.
    pub person_id: String,
}

/// Person details tool.
#[derive(Debug, Clone, Default)]
pub struct GetPersonDetailsTool;

impl GetPersonDetailsTool {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip_all, fields(person_id = %params.person_id))]
    pub fn execute(params: &GetPersonDetailsParams) -> ToolOutput {
        info!("Looking up person: {}", params.person_id);

        let lines: Vec<String> = match find_person(&params.person_id) {
            Some(person) => {
                let birth = person
                    .birth
                    .map(str::to_string)
                    .unwrap_or_else(|| person.birth_year.to_string());
                let death = person
                    .death
                    .map(str::to_string)
                    .unwrap_or_else(|| person.death_year.to_string());

                let mut lines = vec![
                    format!("Name: {}", person.name),
                    format!("Birth: {}", birth),
                    format!("Death: {}", death),
                ];
                if let Some(spouse) = person.spouse {
                    lines.push(format!("Spouse: {}", spouse));
                }
                if let Some(children) = person.children {
                    lines.push(format!("Children: {}", children));
                }
                lines
            }
            None => {
                warn!("No mock record for person ID: {}", params.person_id);
                vec!["No record found in the mock family tree.".to_string()]
            }
        };

        let mut text = format!("Person details for ID: {} (placeholder):\n\n", params.person_id);
        text.push_str(&lines.join("\n"));
        text.push_str("\n\n");
        text.push_str(MOCK_DATA_NOTE);
        ToolOutput::text(text)
    }
}

impl ToolDefinition for GetPersonDetailsTool {
    const NAME: &'static str = "get_person_details";

    const DESCRIPTION: &'static str = "Get detailed information about a specific person";

    fn schema() -> Schema {
        Schema::new().field(FieldSchema::string("personId", "FamilySearch person ID").required())
    }
}

#[async_trait]
impl ToolHandler for GetPersonDetailsTool {
    async fn call(&self, arguments: ToolArguments) -> Result<ToolOutput, ToolError> {
        let params: GetPersonDetailsParams = parse_arguments(arguments)?;
        Ok(Self::execute(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(id: &str) -> GetPersonDetailsParams {
        GetPersonDetailsParams {
            person_id: id.to_string(),
        }
    }

    #[test]
    fn test_known_person() {
        let output = GetPersonDetailsTool::execute(&params("FS123456"));
        let text = output.content[0].as_text();
        assert!(text.contains("Person details for ID: FS123456"));
        assert!(text.contains("Name: John Smith"));
        assert!(text.contains("Birth: 15 Mar 1820, Springfield, IL"));
        assert!(text.contains("Children: 3"));
    }

    #[test]
    fn test_sparse_record_uses_years() {
        let output = GetPersonDetailsTool::execute(&params("FS789012"));
        let text = output.content[0].as_text();
        assert!(text.contains("Name: Jane Smith"));
        assert!(text.contains("Birth: 1785"));
        assert!(!text.contains("Spouse:"));
    }

    #[test]
    fn test_output_layout() {
        let output = GetPersonDetailsTool::execute(&params("FS789012"));
        assert_eq!(
            output.content[0].as_text(),
            format!(
                "Person details for ID: FS789012 (placeholder):\n\n\
                 Name: Jane Smith\nBirth: 1785\nDeath: 1850\n\n{}",
                MOCK_DATA_NOTE
            )
        );
    }

    #[test]
    fn test_unknown_person_still_references_id() {
        let output = GetPersonDetailsTool::execute(&params("FS000000"));
        let text = output.content[0].as_text();
        assert!(text.contains("FS000000"));
        assert!(text.contains("No record found"));
        assert!(text.ends_with(MOCK_DATA_NOTE));
    }

    #[test]
    fn test_schema() {
        let schema = GetPersonDetailsTool::schema();
        assert_eq!(schema.fields().len(), 1);
        assert!(schema.get("personId").unwrap().required);
    }
}
