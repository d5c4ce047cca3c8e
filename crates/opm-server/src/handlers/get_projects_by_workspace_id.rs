//! Get Projects By Workspace Id Tool Handler
//!
//! Handles the get_project_by_workspace_id MCP tool call. The workspace id is
//! echoed back in the envelope.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use opm_domain::ports::OctoPerfApi;
use opm_domain::value_objects::{ResponseEnvelope, STATUS_RETRIEVED};

use crate::args::GetProjectsByWorkspaceIdArgs;
use crate::formatter::ResponseFormatter;

/// Handler for project listings
pub struct GetProjectsByWorkspaceIdHandler {
    api: Arc<dyn OctoPerfApi>,
}

impl GetProjectsByWorkspaceIdHandler {
    /// Create a new get_project_by_workspace_id handler
    pub fn new(api: Arc<dyn OctoPerfApi>) -> Self {
        Self { api }
    }

    /// Handle the get_project_by_workspace_id tool request
    pub async fn handle(
        &self,
        ct: &CancellationToken,
        Parameters(args): Parameters<GetProjectsByWorkspaceIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        let workspace_id = args.workspace_id;
        let outcome = self
            .api
            .get_projects_by_workspace_id(ct, &workspace_id)
            .await
            .map(|body| {
                ResponseEnvelope::new(STATUS_RETRIEVED, body).with_workspace_id(&workspace_id)
            });

        let prefix = format!("Error retrieving projects for workspace {workspace_id}");
        Ok(ResponseFormatter::format_outcome(outcome, &prefix))
    }
}
