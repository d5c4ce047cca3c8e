//! Tool catalog
//!
//! The fixed set of operations the server exposes and the names they are
//! reachable under.

/// One remote OctoPerf operation exposed as an MCP tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Start a test from a runtime id
    RunTest,
    /// Poll the progress of a bench result
    GetTestStatus,
    /// Fetch a bench report
    GetReportDetails,
    /// Fetch a metrics summary for a bench result
    GetMetricDetail,
    /// List the caller's workspaces
    GetCurrentUserWorkspaces,
    /// List the projects of a workspace
    GetProjectsByWorkspaceId,
    /// List the runtimes of a project
    GetRuntimeIds,
}

impl Operation {
    /// Every operation, in catalog order
    pub const ALL: [Self; 7] = [
        Self::RunTest,
        Self::GetTestStatus,
        Self::GetReportDetails,
        Self::GetMetricDetail,
        Self::GetCurrentUserWorkspaces,
        Self::GetProjectsByWorkspaceId,
        Self::GetRuntimeIds,
    ];

    /// Name registered with MCP clients
    pub fn tool_name(self) -> &'static str {
        match self {
            Self::RunTest => "octoperf_run_test",
            Self::GetTestStatus => "octoperf_status",
            Self::GetReportDetails => "octoperf_report",
            Self::GetMetricDetail => "octoperf_get_report_metrics",
            Self::GetCurrentUserWorkspaces => "octoperf_get_current_user_workspaces",
            Self::GetProjectsByWorkspaceId => "get_project_by_workspace_id",
            Self::GetRuntimeIds => "get_runtime_id",
        }
    }

    /// Operation name, accepted by the router as an alias
    pub fn operation_name(self) -> &'static str {
        match self {
            Self::RunTest => "RunTest",
            Self::GetTestStatus => "GetTestStatus",
            Self::GetReportDetails => "GetReportDetails",
            Self::GetMetricDetail => "GetMetricDetail",
            Self::GetCurrentUserWorkspaces => "GetCurrentUserWorkspaces",
            Self::GetProjectsByWorkspaceId => "GetProjectsByWorkspaceId",
            Self::GetRuntimeIds => "GetRuntimeIds",
        }
    }

    /// Human readable description shown in `tools/list`
    pub fn description(self) -> &'static str {
        match self {
            Self::RunTest => "Start an OctoPerf performance test with the specified runtime Id",
            Self::GetTestStatus => "Check the status of an OctoPerf performance test",
            Self::GetReportDetails => "Retrieve the details of an OctoPerf test report",
            Self::GetMetricDetail => "Retrieve specific metrics from an OctoPerf test report",
            Self::GetCurrentUserWorkspaces => "Retrieve the workspaces of the current user",
            Self::GetProjectsByWorkspaceId => {
                "Retrieve the projects linked to a specific workspace"
            }
            Self::GetRuntimeIds => "Retrieve the available runtime Ids for a project",
        }
    }

    /// Resolve a tool name or operation alias
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.tool_name() == name || op.operation_name() == name)
    }
}
