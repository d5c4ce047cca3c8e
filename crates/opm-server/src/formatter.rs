//! Response Formatter
//!
//! Shapes handler outcomes into MCP tool results: a serialized
//! [`ResponseEnvelope`] on success, a single prefixed message with
//! `is_error: true` on failure.

use rmcp::model::{CallToolResult, Content};
use tracing::{error, warn};

use opm_domain::error::{Error, Result};
use opm_domain::value_objects::ResponseEnvelope;

/// Response formatter for MCP server
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Turn an adapter outcome into a tool result
    ///
    /// `error_prefix` is prepended to the adapter error as `"{prefix}: {error}"`.
    pub fn format_outcome(outcome: Result<ResponseEnvelope>, error_prefix: &str) -> CallToolResult {
        match outcome {
            Ok(envelope) => Self::format_envelope(&envelope),
            Err(e) => Self::format_error(error_prefix, &e),
        }
    }

    /// Serialize a success envelope
    pub fn format_envelope(envelope: &ResponseEnvelope) -> CallToolResult {
        match envelope.to_json() {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                error!(status = envelope.status, error = %e, "Failed to serialize response envelope");
                Self::error_result(format!("Error during JSON serialization: {e}"))
            }
        }
    }

    /// Prefixed failure result
    pub fn format_error(prefix: &str, error: &Error) -> CallToolResult {
        warn!(error = %error, "{}", prefix);
        Self::error_result(format!("{prefix}: {error}"))
    }

    /// Argument validation failure, raised before any remote call
    pub fn format_validation_error(tool: &str, error: &Error) -> CallToolResult {
        warn!(tool = tool, error = %error, "Rejected tool arguments");
        Self::error_result(error.to_string())
    }

    fn error_result(message: String) -> CallToolResult {
        CallToolResult::error(vec![Content::text(message)])
    }
}
