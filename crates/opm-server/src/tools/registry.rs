//! Tool Registry Module
//!
//! Manages tool definitions and schema generation for the MCP protocol.
//! Input schemas are generated from the typed argument structs.

use rmcp::ErrorData as McpError;
use rmcp::model::Tool;
use std::borrow::Cow;
use std::sync::Arc;

use crate::args::{
    GetCurrentUserWorkspacesArgs, GetMetricDetailArgs, GetProjectsByWorkspaceIdArgs,
    GetReportDetailsArgs, GetRuntimeIdsArgs, GetTestStatusArgs, RunTestArgs,
};
use crate::tools::Operation;

/// Tool definitions for MCP protocol
pub struct ToolDefinitions;

impl ToolDefinitions {
    /// Definition of one operation's tool
    pub fn for_operation(operation: Operation) -> Result<Tool, McpError> {
        let schema = match operation {
            Operation::RunTest => schemars::schema_for!(RunTestArgs),
            Operation::GetTestStatus => schemars::schema_for!(GetTestStatusArgs),
            Operation::GetReportDetails => schemars::schema_for!(GetReportDetailsArgs),
            Operation::GetMetricDetail => schemars::schema_for!(GetMetricDetailArgs),
            Operation::GetCurrentUserWorkspaces => {
                schemars::schema_for!(GetCurrentUserWorkspacesArgs)
            }
            Operation::GetProjectsByWorkspaceId => {
                schemars::schema_for!(GetProjectsByWorkspaceIdArgs)
            }
            Operation::GetRuntimeIds => schemars::schema_for!(GetRuntimeIdsArgs),
        };
        Self::create_tool(operation.tool_name(), operation.description(), schema)
    }

    /// Create a tool from schema
    fn create_tool(
        name: &'static str,
        description: &'static str,
        schema: schemars::Schema,
    ) -> Result<Tool, McpError> {
        let schema_value = serde_json::to_value(schema)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let input_schema = schema_value
            .as_object()
            .ok_or_else(|| {
                McpError::internal_error(format!("Schema for {} is not an object", name), None)
            })?
            .clone();

        Ok(Tool {
            name: Cow::Borrowed(name),
            title: None,
            description: Some(Cow::Borrowed(description)),
            input_schema: Arc::new(input_schema),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: Default::default(),
        })
    }
}

/// Create the complete list of available tools
///
/// Returns all tool definitions for the MCP list_tools response.
pub fn create_tool_list() -> Result<Vec<Tool>, McpError> {
    Operation::ALL
        .into_iter()
        .map(ToolDefinitions::for_operation)
        .collect()
}
