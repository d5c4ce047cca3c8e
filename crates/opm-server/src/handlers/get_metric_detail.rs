//! Get Metric Detail Tool Handler
//!
//! Handles the octoperf_get_report_metrics MCP tool call. The metric ids are
//! forwarded in caller order; unknown ids are not rejected here.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use opm_domain::ports::OctoPerfApi;
use opm_domain::value_objects::{ResponseEnvelope, STATUS_METRICS_RETRIEVED};

use crate::args::GetMetricDetailArgs;
use crate::constants::ERROR_PREFIX_METRICS;
use crate::formatter::ResponseFormatter;

/// Handler for metric summaries
pub struct GetMetricDetailHandler {
    api: Arc<dyn OctoPerfApi>,
}

impl GetMetricDetailHandler {
    /// Create a new octoperf_get_report_metrics handler
    pub fn new(api: Arc<dyn OctoPerfApi>) -> Self {
        Self { api }
    }

    /// Handle the octoperf_get_report_metrics tool request
    pub async fn handle(
        &self,
        ct: &CancellationToken,
        Parameters(args): Parameters<GetMetricDetailArgs>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            bench_result_id = %args.bench_result_id,
            metric_ids = ?args.metric_ids,
            "Retrieving metrics"
        );

        let outcome = self
            .api
            .get_metric_detail(ct, &args.bench_result_id, &args.metric_ids)
            .await
            .map(|body| ResponseEnvelope::new(STATUS_METRICS_RETRIEVED, body));

        Ok(ResponseFormatter::format_outcome(
            outcome,
            ERROR_PREFIX_METRICS,
        ))
    }
}
