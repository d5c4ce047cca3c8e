//! Get Test Status Tool Handler
//!
//! Handles the octoperf_status MCP tool call.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use opm_domain::ports::OctoPerfApi;
use opm_domain::value_objects::{ResponseEnvelope, STATUS_RETRIEVED};

use crate::args::GetTestStatusArgs;
use crate::constants::ERROR_PREFIX_TEST_STATUS;
use crate::formatter::ResponseFormatter;

/// Handler for test progress polling
pub struct GetTestStatusHandler {
    api: Arc<dyn OctoPerfApi>,
}

impl GetTestStatusHandler {
    /// Create a new octoperf_status handler
    pub fn new(api: Arc<dyn OctoPerfApi>) -> Self {
        Self { api }
    }

    /// Handle the octoperf_status tool request
    pub async fn handle(
        &self,
        ct: &CancellationToken,
        Parameters(args): Parameters<GetTestStatusArgs>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .api
            .get_test_status(ct, &args.bench_result_id)
            .await
            .map(|body| ResponseEnvelope::new(STATUS_RETRIEVED, body));

        Ok(ResponseFormatter::format_outcome(
            outcome,
            ERROR_PREFIX_TEST_STATUS,
        ))
    }
}
