//! Tool Router Module
//!
//! Routes incoming tool call requests to the appropriate handlers.
//! Arguments are extracted and validated here, so a rejected call never
//! reaches a handler.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolRequestParam, CallToolResult, JsonObject};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::args::{
    GetCurrentUserWorkspacesArgs, GetMetricDetailArgs, GetProjectsByWorkspaceIdArgs,
    GetReportDetailsArgs, GetRuntimeIdsArgs, GetTestStatusArgs, RunTestArgs, ToolArgs,
    parse_tool_args,
};
use crate::formatter::ResponseFormatter;
use crate::handlers::{
    GetCurrentUserWorkspacesHandler, GetMetricDetailHandler, GetProjectsByWorkspaceIdHandler,
    GetReportDetailsHandler, GetRuntimeIdsHandler, GetTestStatusHandler, RunTestHandler,
};
use crate::tools::Operation;

/// Handler references for tool routing
#[derive(Clone)]
pub struct ToolHandlers {
    /// Handler for octoperf_run_test
    pub run_test: Arc<RunTestHandler>,
    /// Handler for octoperf_status
    pub get_test_status: Arc<GetTestStatusHandler>,
    /// Handler for octoperf_report
    pub get_report_details: Arc<GetReportDetailsHandler>,
    /// Handler for octoperf_get_report_metrics
    pub get_metric_detail: Arc<GetMetricDetailHandler>,
    /// Handler for octoperf_get_current_user_workspaces
    pub get_current_user_workspaces: Arc<GetCurrentUserWorkspacesHandler>,
    /// Handler for get_project_by_workspace_id
    pub get_projects_by_workspace_id: Arc<GetProjectsByWorkspaceIdHandler>,
    /// Handler for get_runtime_id
    pub get_runtime_ids: Arc<GetRuntimeIdsHandler>,
}

/// Route a tool call request to the appropriate handler
///
/// `ct` is the request's cancellation token, handed down to the remote call.
pub async fn route_tool_call(
    request: CallToolRequestParam,
    handlers: &ToolHandlers,
    ct: CancellationToken,
) -> Result<CallToolResult, McpError> {
    dispatch_tool_call(&request.name, request.arguments.as_ref(), handlers, &ct).await
}

/// Dispatch a tool call by name with its raw argument object
///
/// Unknown names are a protocol error; invalid arguments are a tool error
/// result and trigger no remote call.
pub async fn dispatch_tool_call(
    name: &str,
    arguments: Option<&JsonObject>,
    handlers: &ToolHandlers,
    ct: &CancellationToken,
) -> Result<CallToolResult, McpError> {
    let Some(operation) = Operation::from_name(name) else {
        return Err(McpError::invalid_params(
            format!("Unknown tool: {}", name),
            None,
        ));
    };
    debug!(tool = operation.tool_name(), "Dispatching tool call");

    match operation {
        Operation::RunTest => {
            let args = match parse_args::<RunTestArgs>(operation, arguments) {
                Ok(args) => args,
                Err(rejected) => return Ok(rejected),
            };
            handlers.run_test.handle(ct, Parameters(args)).await
        }
        Operation::GetTestStatus => {
            let args = match parse_args::<GetTestStatusArgs>(operation, arguments) {
                Ok(args) => args,
                Err(rejected) => return Ok(rejected),
            };
            handlers.get_test_status.handle(ct, Parameters(args)).await
        }
        Operation::GetReportDetails => {
            let args = match parse_args::<GetReportDetailsArgs>(operation, arguments) {
                Ok(args) => args,
                Err(rejected) => return Ok(rejected),
            };
            handlers.get_report_details.handle(ct, Parameters(args)).await
        }
        Operation::GetMetricDetail => {
            let args = match parse_args::<GetMetricDetailArgs>(operation, arguments) {
                Ok(args) => args,
                Err(rejected) => return Ok(rejected),
            };
            handlers.get_metric_detail.handle(ct, Parameters(args)).await
        }
        Operation::GetCurrentUserWorkspaces => {
            let args = match parse_args::<GetCurrentUserWorkspacesArgs>(operation, arguments) {
                Ok(args) => args,
                Err(rejected) => return Ok(rejected),
            };
            handlers
                .get_current_user_workspaces
                .handle(ct, Parameters(args))
                .await
        }
        Operation::GetProjectsByWorkspaceId => {
            let args = match parse_args::<GetProjectsByWorkspaceIdArgs>(operation, arguments) {
                Ok(args) => args,
                Err(rejected) => return Ok(rejected),
            };
            handlers
                .get_projects_by_workspace_id
                .handle(ct, Parameters(args))
                .await
        }
        Operation::GetRuntimeIds => {
            let args = match parse_args::<GetRuntimeIdsArgs>(operation, arguments) {
                Ok(args) => args,
                Err(rejected) => return Ok(rejected),
            };
            handlers.get_runtime_ids.handle(ct, Parameters(args)).await
        }
    }
}

/// Parse request arguments, turning rejection into a tool error result
fn parse_args<T: ToolArgs>(
    operation: Operation,
    arguments: Option<&JsonObject>,
) -> Result<T, CallToolResult> {
    parse_tool_args::<T>(arguments)
        .map_err(|e| ResponseFormatter::format_validation_error(operation.tool_name(), &e))
}
