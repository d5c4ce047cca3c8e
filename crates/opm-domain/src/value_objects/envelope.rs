//! Tool response envelope
//!
//! Success shape returned to the MCP caller: a status tag, the identifiers
//! the caller passed in (when the tool echoes them) and the untouched body of
//! the remote call.

use serde::Serialize;

use crate::error::Result;

/// Status tag of a tool that started a test
pub const STATUS_TEST_STARTED: &str = "test_started";
/// Status tag of a tool that fetched a report
pub const STATUS_REPORT_RETRIEVED: &str = "report_retrieved";
/// Status tag of a tool that fetched metrics
pub const STATUS_METRICS_RETRIEVED: &str = "metrics_retrieved";
/// Status tag of the plain lookup tools
pub const STATUS_RETRIEVED: &str = "retrieved";

/// Serialized once per invocation, then dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Operation-specific status tag
    pub status: &'static str,
    /// Echoed workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    /// Echoed project id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Raw remote response body
    pub response: String,
}

impl ResponseEnvelope {
    /// Envelope without echoed identifiers
    pub fn new<S: Into<String>>(status: &'static str, response: S) -> Self {
        Self {
            status,
            workspace_id: None,
            project_id: None,
            response: response.into(),
        }
    }

    /// Echo the workspace id
    pub fn with_workspace_id<S: Into<String>>(mut self, workspace_id: S) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Echo the project id
    pub fn with_project_id<S: Into<String>>(mut self, project_id: S) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Encode as compact JSON text
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
