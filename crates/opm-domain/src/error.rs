//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the OctoPerf MCP server
///
/// Only [`Error::Configuration`] is fatal. Every other variant is recovered at
/// the tool invocation boundary and returned to the caller as an error result.
#[derive(Error, Debug)]
pub enum Error {
    /// Startup configuration problem (missing credential, bad base URL)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Caller supplied missing or malformed tool arguments
    #[error("Invalid arguments: {}", issues.join("; "))]
    Validation {
        /// Every problem found, in declaration order of the parameters
        issues: Vec<String>,
    },

    /// The outbound call never reached the remote API
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The remote API answered with a non-success status
    #[error("OctoPerf API error (code: {status}): {body}")]
    RemoteApi {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// JSON encoding error
    #[error("Serialization error: {source}")]
    Serialization {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error from a single issue
    pub fn invalid_argument<S: Into<String>>(issue: S) -> Self {
        Self::Validation {
            issues: vec![issue.into()],
        }
    }

    /// Create a validation error from a list of issues
    pub fn validation(issues: Vec<String>) -> Self {
        Self::Validation { issues }
    }

    /// Create a transport error without source
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error with source
    pub fn transport_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Transport error used when the caller cancelled the invocation
    pub fn cancelled() -> Self {
        Self::transport("request cancelled by caller")
    }

    /// Create a remote API error
    pub fn remote_api<S: Into<String>>(status: u16, body: S) -> Self {
        Self::RemoteApi {
            status,
            body: body.into(),
        }
    }

    /// Whether this error must stop the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
