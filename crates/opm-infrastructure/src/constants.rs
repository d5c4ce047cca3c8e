//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `opm_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "octoperf-mcp.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "octoperf-mcp";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "OPM";

/// Separator between nested keys in prefixed environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Canonical environment variable holding the OctoPerf bearer token
pub const API_KEY_ENV_VAR: &str = "OCTOPERF_API_KEY";

/// Canonical environment variable holding the default project id
pub const PROJECT_ID_ENV_VAR: &str = "OCTOPERF_PROJECT_ID";

// ============================================================================
// OCTOPERF API CONSTANTS
// ============================================================================

/// Public OctoPerf API host
pub const DEFAULT_OCTOPERF_BASE_URL: &str = "https://api.octoperf.com";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV_VAR: &str = "OPM_LOG";
