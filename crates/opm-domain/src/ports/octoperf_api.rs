//! OctoPerf API Port
//!
//! Boundary contract for the remote OctoPerf REST API. One method per
//! supported operation; every method performs exactly one HTTP call.
//!
//! ## Outcome
//!
//! | Outcome | Result |
//! |---------|--------|
//! | 2xx | `Ok(body)` with the raw body text |
//! | non-2xx | [`Error::RemoteApi`](crate::error::Error::RemoteApi) with status and raw body |
//! | network failure or cancellation | [`Error::Transport`](crate::error::Error::Transport) |

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// OctoPerf REST API operations
///
/// `ct` is the caller's cancellation context. Implementations must abort the
/// in-flight call and return a transport error as soon as it is cancelled.
#[async_trait]
pub trait OctoPerfApi: Send + Sync {
    /// `GET /runtime/bench-results/progress/{benchResultId}`
    async fn get_test_status(
        &self,
        ct: &CancellationToken,
        bench_result_id: &str,
    ) -> Result<String>;

    /// `POST /runtime/scenarios/run/{runtimeId}`
    async fn run_test(&self, ct: &CancellationToken, runtime_id: &str) -> Result<String>;

    /// `GET /analysis/bench-reports/{reportId}`
    async fn get_report_details(&self, ct: &CancellationToken, report_id: &str) -> Result<String>;

    /// `POST /analysis/metrics/summary`
    async fn get_metric_detail(
        &self,
        ct: &CancellationToken,
        bench_result_id: &str,
        metric_ids: &[String],
    ) -> Result<String>;

    /// `GET /workspaces/member-of`
    async fn get_current_user_workspaces(&self, ct: &CancellationToken) -> Result<String>;

    /// `GET /design/projects/by-workspace/{workspaceId}/DESIGN`
    async fn get_projects_by_workspace_id(
        &self,
        ct: &CancellationToken,
        workspace_id: &str,
    ) -> Result<String>;

    /// `GET /runtime/scenarios/by-project/{projectId}`
    async fn get_runtime_ids(&self, ct: &CancellationToken, project_id: &str) -> Result<String>;
}
