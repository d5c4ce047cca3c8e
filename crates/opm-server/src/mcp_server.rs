//! MCP Server Implementation
//!
//! Core MCP protocol server exposing the OctoPerf tool catalog. The adapter
//! behind the [`OctoPerfApi`] port arrives through constructor injection and
//! is shared by the per-tool handlers.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};

use opm_domain::ports::OctoPerfApi;

use crate::constants::SERVER_NAME;
use crate::handlers::{
    GetCurrentUserWorkspacesHandler, GetMetricDetailHandler, GetProjectsByWorkspaceIdHandler,
    GetReportDetailsHandler, GetRuntimeIdsHandler, GetTestStatusHandler, RunTestHandler,
};
use crate::tools::{Operation, ToolHandlers, create_tool_list, route_tool_call};

/// Core MCP server implementation
///
/// Stateless between calls: every tool invocation is independent and may run
/// concurrently with others.
#[derive(Clone)]
pub struct OctoPerfMcpServer {
    /// Per-tool handlers
    handlers: ToolHandlers,
}

impl OctoPerfMcpServer {
    /// Create a new MCP server with injected dependencies
    ///
    /// `default_project_id` backs `get_runtime_id` calls that omit `projectId`.
    pub fn new(api: Arc<dyn OctoPerfApi>, default_project_id: Option<String>) -> Self {
        let handlers = ToolHandlers {
            run_test: Arc::new(RunTestHandler::new(Arc::clone(&api))),
            get_test_status: Arc::new(GetTestStatusHandler::new(Arc::clone(&api))),
            get_report_details: Arc::new(GetReportDetailsHandler::new(Arc::clone(&api))),
            get_metric_detail: Arc::new(GetMetricDetailHandler::new(Arc::clone(&api))),
            get_current_user_workspaces: Arc::new(GetCurrentUserWorkspacesHandler::new(
                Arc::clone(&api),
            )),
            get_projects_by_workspace_id: Arc::new(GetProjectsByWorkspaceIdHandler::new(
                Arc::clone(&api),
            )),
            get_runtime_ids: Arc::new(GetRuntimeIdsHandler::new(
                Arc::clone(&api),
                default_project_id,
            )),
        };

        Self { handlers }
    }

    /// Access to the tool handlers
    pub fn handlers(&self) -> &ToolHandlers {
        &self.handlers
    }

    fn instructions() -> String {
        let mut text = String::from(
            "OctoPerf MCP Server - Performance Testing\n\n\
             Start OctoPerf load tests, follow their progress and read their results.\n\n\
             Tools:\n",
        );
        for operation in Operation::ALL {
            text.push_str(&format!(
                "- {}: {}\n",
                operation.tool_name(),
                operation.description()
            ));
        }
        text
    }
}

impl ServerHandler for OctoPerfMcpServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(Self::instructions()),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = create_tool_list()?;
        Ok(ListToolsResult {
            tools,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    async fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        route_tool_call(request, &self.handlers, context.ct).await
    }
}

impl std::fmt::Debug for OctoPerfMcpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctoPerfMcpServer")
            .field(
                "default_project_id",
                &self.handlers.get_runtime_ids.default_project_id(),
            )
            .finish_non_exhaustive()
    }
}
