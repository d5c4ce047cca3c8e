//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `opm_domain::constants`.

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// User agent sent with every OctoPerf request
pub const USER_AGENT: &str = concat!("octoperf-mcp/", env!("CARGO_PKG_VERSION"));

/// Error message when the OctoPerf API key is absent
pub const ERROR_MSG_MISSING_API_KEY: &str = "OCTOPERF_API_KEY environment variable is not set";
