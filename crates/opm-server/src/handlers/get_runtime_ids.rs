//! Get Runtime Ids Tool Handler
//!
//! Handles the get_runtime_id MCP tool call. An omitted `projectId` resolves
//! to the configured default project; the id actually used is echoed back.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use opm_domain::error::Error;
use opm_domain::ports::OctoPerfApi;
use opm_domain::value_objects::{ResponseEnvelope, STATUS_RETRIEVED};

use crate::args::GetRuntimeIdsArgs;
use crate::formatter::ResponseFormatter;
use crate::tools::Operation;

/// Handler for runtime listings
pub struct GetRuntimeIdsHandler {
    api: Arc<dyn OctoPerfApi>,
    default_project_id: Option<String>,
}

impl GetRuntimeIdsHandler {
    /// Create a new get_runtime_id handler
    pub fn new(api: Arc<dyn OctoPerfApi>, default_project_id: Option<String>) -> Self {
        let default_project_id = default_project_id.filter(|id| !id.trim().is_empty());
        Self {
            api,
            default_project_id,
        }
    }

    /// Project used when the caller omits `projectId`
    pub fn default_project_id(&self) -> Option<&str> {
        self.default_project_id.as_deref()
    }

    /// Handle the get_runtime_id tool request
    pub async fn handle(
        &self,
        ct: &CancellationToken,
        Parameters(args): Parameters<GetRuntimeIdsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let Some(project_id) = args.project_id.or_else(|| self.default_project_id.clone())
        else {
            let error = Error::invalid_argument(
                "missing required parameter 'projectId' and no default project is configured",
            );
            return Ok(ResponseFormatter::format_validation_error(
                Operation::GetRuntimeIds.tool_name(),
                &error,
            ));
        };
        debug!(project_id = %project_id, "Listing runtimes");

        let outcome = self
            .api
            .get_runtime_ids(ct, &project_id)
            .await
            .map(|body| ResponseEnvelope::new(STATUS_RETRIEVED, body).with_project_id(&project_id));

        let prefix = format!("Error retrieving Runtime IDs for project {project_id}");
        Ok(ResponseFormatter::format_outcome(outcome, &prefix))
    }
}
