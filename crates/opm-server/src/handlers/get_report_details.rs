//! Get Report Details Tool Handler
//!
//! Handles the octoperf_report MCP tool call.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use opm_domain::ports::OctoPerfApi;
use opm_domain::value_objects::{ResponseEnvelope, STATUS_REPORT_RETRIEVED};

use crate::args::GetReportDetailsArgs;
use crate::constants::ERROR_PREFIX_REPORT;
use crate::formatter::ResponseFormatter;

/// Handler for bench report retrieval
pub struct GetReportDetailsHandler {
    api: Arc<dyn OctoPerfApi>,
}

impl GetReportDetailsHandler {
    /// Create a new octoperf_report handler
    pub fn new(api: Arc<dyn OctoPerfApi>) -> Self {
        Self { api }
    }

    /// Handle the octoperf_report tool request
    pub async fn handle(
        &self,
        ct: &CancellationToken,
        Parameters(args): Parameters<GetReportDetailsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .api
            .get_report_details(ct, &args.report_id)
            .await
            .map(|body| ResponseEnvelope::new(STATUS_REPORT_RETRIEVED, body));

        Ok(ResponseFormatter::format_outcome(outcome, ERROR_PREFIX_REPORT))
    }
}
