//! Server-specific constants
//!
//! Server identity advertised at `initialize` and the caller-facing prefixes
//! of tool error messages.

// ============================================================================
// SERVER IDENTITY
// ============================================================================

/// Name advertised in the MCP `initialize` response
pub const SERVER_NAME: &str = "OctoPerf MCP Server";

// ============================================================================
// TOOL ERROR PREFIXES
// ============================================================================

/// Prefix of octoperf_run_test failures
pub const ERROR_PREFIX_RUN_TEST: &str = "Error running test";

/// Prefix of octoperf_status failures
pub const ERROR_PREFIX_TEST_STATUS: &str = "Error checking status";

/// Prefix of octoperf_report failures
pub const ERROR_PREFIX_REPORT: &str = "Error retrieving report";

/// Prefix of octoperf_get_report_metrics failures
pub const ERROR_PREFIX_METRICS: &str = "Error retrieving metrics";

/// Prefix of octoperf_get_current_user_workspaces failures
pub const ERROR_PREFIX_WORKSPACES: &str = "Error retrieving user workspaces";
