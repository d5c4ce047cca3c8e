//! # OctoPerf MCP Infrastructure
//!
//! Cross-cutting technical concerns: layered configuration and structured
//! logging. Nothing here knows about individual tools.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig, OctoPerfConfig};
