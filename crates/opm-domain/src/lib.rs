//! # OctoPerf MCP Domain
//!
//! Core types shared by every layer of the OctoPerf MCP server.
//!
//! ## Contents
//!
//! - [`error`] - error taxonomy and `Result` alias
//! - [`ports`] - the [`OctoPerfApi`] boundary implemented by providers
//! - [`value_objects`] - metric summary request body and response envelope
//! - [`constants`] - metric lookup tables

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::OctoPerfApi;
pub use tokio_util::sync::CancellationToken;
pub use value_objects::{MetricType, ResponseEnvelope, SummaryReportItem};
