//! Tool catalog - the advertised tool surface.
//!
//! The catalog is the single source of truth for which tools this server
//! advertises. The router consumes it to build dispatch routes, and refuses
//! to start when a catalog entry has no handler, so the advertised surface
//! and the callable surface can never drift apart.

use rmcp::model::{JsonObject, Tool};
use std::sync::Arc;

use super::definitions::MobyTool;

/// Static metadata describing one advertised tool.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    /// Tool name as exposed over MCP.
    pub name: &'static str,

    /// Human/model-facing description of what the tool does.
    pub description: &'static str,

    /// JSON Schema for the tool's input arguments.
    pub input_schema: Arc<JsonObject>,

    /// MIME type of the content produced by the tool.
    pub mime_type: &'static str,
}

impl ToolDescriptor {
    /// Convert the descriptor into the rmcp wire representation.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema.clone(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// All tools advertised by this server.
pub fn catalog() -> Vec<ToolDescriptor> {
    vec![MobyTool::descriptor()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let catalog = catalog();
        let names: HashSet<_> = catalog.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_catalog_advertises_moby() {
        let catalog = catalog();
        let moby = catalog
            .iter()
            .find(|d| d.name == "moby")
            .expect("moby tool should be in the catalog");

        assert_eq!(moby.mime_type, "application/json");
        assert!(!moby.description.is_empty());
    }

    #[test]
    fn test_moby_schema_requires_question_and_shop_id() {
        let catalog = catalog();
        let moby = catalog.iter().find(|d| d.name == "moby").unwrap();

        let required = moby.input_schema["required"]
            .as_array()
            .expect("schema should list required fields");
        assert_eq!(required.len(), 2);
        assert!(required.contains(&"question".into()));
        assert!(required.contains(&"shopId".into()));
    }

    #[test]
    fn test_to_tool_carries_name_schema_and_description() {
        let descriptor = MobyTool::descriptor();
        let tool = descriptor.to_tool();

        assert_eq!(tool.name.as_ref(), "moby");
        assert_eq!(tool.input_schema, descriptor.input_schema);
        assert!(tool.description.is_some());
    }
}
