//! Configuration types

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_OCTOPERF_BASE_URL};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote OctoPerf API settings
    #[serde(default)]
    pub octoperf: OctoPerfConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// OctoPerf API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OctoPerfConfig {
    /// API host, without trailing path
    pub base_url: String,

    /// Bearer token; required before any tool can be served
    #[serde(default, deserialize_with = "lenient_string")]
    pub api_key: Option<String>,

    /// Project used by `get_runtime_id` when the caller omits `projectId`
    #[serde(default, deserialize_with = "lenient_string")]
    pub default_project_id: Option<String>,
}

impl Default for OctoPerfConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OCTOPERF_BASE_URL.to_string(),
            api_key: None,
            default_project_id: None,
        }
    }
}

// Keeps the token out of logs.
impl fmt::Debug for OctoPerfConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OctoPerfConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_project_id", &self.default_project_id)
            .finish()
    }
}

/// Scalar that env and TOML layers may produce for an identifier
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

/// Accept numeric and boolean values for string settings
///
/// `OPM_OCTOPERF__DEFAULT_PROJECT_ID=12345` or `default_project_id = 12345`
/// arrive as integers; both mean the id `"12345"`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
            Scalar::Text(text) => text,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }),
    )
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
