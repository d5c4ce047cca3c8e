//! MCP Tool Handlers
//!
//! One handler per tool. Each receives already validated arguments, makes
//! exactly one call through the [`OctoPerfApi`](opm_domain::ports::OctoPerfApi)
//! port and shapes the outcome with the response formatter.

pub mod get_current_user_workspaces;
pub mod get_metric_detail;
pub mod get_projects_by_workspace_id;
pub mod get_report_details;
pub mod get_runtime_ids;
pub mod get_test_status;

// Re-export handlers for convenience
pub use get_current_user_workspaces::GetCurrentUserWorkspacesHandler;
pub use get_metric_detail::GetMetricDetailHandler;
pub use get_projects_by_workspace_id::GetProjectsByWorkspaceIdHandler;
pub use get_report_details::GetReportDetailsHandler;
pub use get_runtime_ids::GetRuntimeIdsHandler;
pub use get_test_status::GetTestStatusHandler;
pub use run_test::RunTestHandler;
