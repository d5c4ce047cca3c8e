//! # OctoPerf MCP Server
//!
//! MCP protocol server exposing the OctoPerf load-testing REST API as a fixed
//! catalog of tools, served over stdio.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use opm_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config locations + environment (OCTOPERF_API_KEY)
//!     run(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`OctoPerfMcpServer`] | Main server struct |
//! | [`McpServerBuilder`] | Builder for server configuration |
//!
//! ## Tools
//!
//! | Tool | Remote call |
//! |------|-------------|
//! | `octoperf_run_test` | `POST /runtime/scenarios/run/{runtimeId}` |
//! | `octoperf_status` | `GET /runtime/bench-results/progress/{benchResultId}` |
//! | `octoperf_report` | `GET /analysis/bench-reports/{reportId}` |
//! | `octoperf_get_report_metrics` | `POST /analysis/metrics/summary` |
//! | `octoperf_get_current_user_workspaces` | `GET /workspaces/member-of` |
//! | `get_project_by_workspace_id` | `GET /design/projects/by-workspace/{workspaceId}/DESIGN` |
//! | `get_runtime_id` | `GET /runtime/scenarios/by-project/{projectId}` |

pub mod args;
pub mod builder;
pub mod constants;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod tools;
pub mod transport;

// Re-export core types for public API
pub use builder::McpServerBuilder;
pub use init::run;
pub use mcp_server::OctoPerfMcpServer;
