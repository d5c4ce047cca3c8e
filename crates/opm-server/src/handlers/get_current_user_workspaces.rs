//! Get Current User Workspaces Tool Handler
//!
//! Handles the octoperf_get_current_user_workspaces MCP tool call.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use opm_domain::ports::OctoPerfApi;
use opm_domain::value_objects::{ResponseEnvelope, STATUS_RETRIEVED};

use crate::args::GetCurrentUserWorkspacesArgs;
use crate::constants::ERROR_PREFIX_WORKSPACES;
use crate::formatter::ResponseFormatter;

/// Handler for the caller's workspace listing
pub struct GetCurrentUserWorkspacesHandler {
    api: Arc<dyn OctoPerfApi>,
}

impl GetCurrentUserWorkspacesHandler {
    /// Create a new octoperf_get_current_user_workspaces handler
    pub fn new(api: Arc<dyn OctoPerfApi>) -> Self {
        Self { api }
    }

    /// Handle the octoperf_get_current_user_workspaces tool request
    pub async fn handle(
        &self,
        ct: &CancellationToken,
        Parameters(_args): Parameters<GetCurrentUserWorkspacesArgs>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .api
            .get_current_user_workspaces(ct)
            .await
            .map(|body| ResponseEnvelope::new(STATUS_RETRIEVED, body));

        Ok(ResponseFormatter::format_outcome(
            outcome,
            ERROR_PREFIX_WORKSPACES,
        ))
    }
}
